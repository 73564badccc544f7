//! The list under sort and its bar layout
//!
//! [`ListModel`] owns the values and caches the layout metrics derived from
//! them (extrema, bar width, height of one value unit). The metrics are only
//! recomputed in [`ListModel::replace`]. Sorting swaps values in place through
//! [`ListModel::values_mut`], which cannot change the length or the extrema, so
//! the cached layout stays valid for the whole run.
//!
//! # Layout
//!
//! ```text
//! block_width  = (width  - side_pad) / len
//! block_height = (height - top_pad)  / (max - min)
//! bar_x(i)     = side_pad / 2 + i * block_width
//! bar_top(v)   = height - (v - min) * block_height
//! ```
//!
//! When every value is equal, `max - min` is zero; all bars are then drawn up
//! to the top of the chart area instead.

pub mod errors;

use crate::config::{Geometry, VirtualRect};
use errors::ListError;
use rand::Rng;

/// Generate `count` values drawn uniformly from `min..=max`
pub fn generate_values<R: Rng + ?Sized>(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>, ListError> {
    if count == 0 {
        return Err(ListError::Empty);
    }
    if min > max {
        return Err(ListError::InvalidBounds { min, max });
    }
    Ok((0..count).map(|_| rng.gen_range(min..=max)).collect())
}

#[derive(Debug, Clone)]
pub struct ListModel {
    geometry: Geometry,
    values: Vec<i64>,
    min_value: i64,
    max_value: i64,
    block_width: u32,
    block_height: u32,
    start_x: u32,
}

impl ListModel {
    pub fn new(geometry: Geometry, values: Vec<i64>) -> Result<Self, ListError> {
        let mut list = ListModel {
            geometry,
            values: Vec::new(),
            min_value: 0,
            max_value: 0,
            block_width: 0,
            block_height: 0,
            start_x: geometry.side_pad / 2,
        };
        list.replace(values)?;
        Ok(list)
    }

    /// Install a new list and recompute every layout metric.
    ///
    /// On error the previous list and metrics are left untouched.
    pub fn replace(&mut self, values: Vec<i64>) -> Result<(), ListError> {
        let (Some(&min_value), Some(&max_value)) = (values.iter().min(), values.iter().max())
        else {
            return Err(ListError::Empty);
        };

        let chart = self.geometry.chart_area();
        let block_width = chart.width as usize / values.len();
        if block_width == 0 {
            return Err(ListError::TooManyValues {
                count: values.len(),
                max: chart.width as usize,
            });
        }

        let range = (max_value as i128 - min_value as i128) as u128;
        let block_height = if range == 0 {
            chart.height
        } else {
            (chart.height as u128 / range) as u32
        };

        self.values = values;
        self.min_value = min_value;
        self.max_value = max_value;
        self.block_width = block_width as u32;
        self.block_height = block_height;
        self.start_x = self.geometry.side_pad / 2;
        Ok(())
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// In-place access for the sort engine; the length is fixed
    pub fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn block_width(&self) -> u32 {
        self.block_width
    }

    pub fn block_height(&self) -> u32 {
        self.block_height
    }

    pub fn start_x(&self) -> u32 {
        self.start_x
    }

    /// Left edge of the bar at `index`
    pub fn bar_x(&self, index: usize) -> u32 {
        self.start_x + index as u32 * self.block_width
    }

    /// Top edge of a bar holding `value`
    pub fn bar_top(&self, value: i64) -> u32 {
        if self.min_value == self.max_value {
            return self.geometry.top_pad;
        }
        let rise = (value as i128 - self.min_value as i128) * self.block_height as i128;
        (self.geometry.height as i128 - rise).clamp(0, self.geometry.height as i128) as u32
    }

    /// Rectangle of the bar at `index`, running from its top edge to the
    /// bottom of the window
    pub fn bar_rect(&self, index: usize) -> Option<VirtualRect> {
        let value = *self.values.get(index)?;
        let y = self.bar_top(value);
        Some(VirtualRect {
            x: self.bar_x(index),
            y,
            width: self.block_width,
            height: self.geometry.height - y,
        })
    }
}
