//! Threshold categorization algorithms
//!
//! This module contains the pure categorization functions of the screening
//! flow: glucose band analysis and BMI classification. Both map a single
//! measurement to a discrete clinical category via fixed thresholds.

pub mod bmi;
pub mod glucose;
