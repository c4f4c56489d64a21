//! Classification and repair of outliers

pub mod tukey;
