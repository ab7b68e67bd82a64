//! Color difference formulas operating on CIELAB values

mod ciede2000;

pub use self::ciede2000::ciede2000;
