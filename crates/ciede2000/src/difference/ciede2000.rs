//! CIEDE2000 color difference (ΔE00)
//!
//! CIE Technical Report 142-2001, as worked through in
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 color-difference formula:
//! Implementation notes, supplementary test data, and mathematical
//! observations", Color Research & Application 30(1), 2005.
//!
//! All hue angles below are in degrees; they are converted to radians only
//! at the point a trigonometric function is evaluated.

use crate::color::Lab;

/// 25⁷, the chroma pivot shared by the G factor and the rotation magnitude.
const POW25_7: f64 = 6_103_515_625.0;

/// Viewing-condition weights, fixed at the reference conditions.
const K_L: f64 = 1.0;
const K_C: f64 = 1.0;
const K_H: f64 = 1.0;

/// CIEDE2000 difference between two CIELAB colors.
///
/// Returns a non-negative value where roughly 1.0 is a just noticeable
/// difference. The result is symmetric in its arguments and exactly zero
/// for identical inputs. NaN or infinite components are not rejected and
/// produce NaN.
///
/// # Example
///
/// ```
/// use ciede2000::{ciede2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    // Chroma correction of the a* axis
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_bar));

    let a1_prime = (1.0 + g) * lab1.a;
    let a2_prime = (1.0 + g) * lab2.a;

    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);
    let chroma_product = c1_prime * c2_prime;

    let h1_prime = hue_angle(lab1.b, a1_prime);
    let h2_prime = hue_angle(lab2.b, a2_prime);

    // Differences
    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;
    let delta_h_prime = hue_delta(h1_prime, h2_prime, chroma_product);
    let delta_big_h_prime =
        2.0 * chroma_product.sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Means
    let l_bar_prime = (lab1.l + lab2.l) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;
    let h_bar_prime = hue_mean(h1_prime, h2_prime, chroma_product);

    // Weighting functions
    let t = 1.0 - 0.17 * (h_bar_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_prime).to_radians().cos()
        + 0.32 * (3.0 * h_bar_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let r_c = 2.0 * chroma_weight(c_bar_prime);

    let l_offset_sq = (l_bar_prime - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;

    // Blue-region rotation; negative by the reference definition
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let term_l = delta_l_prime / (K_L * s_l);
    let term_c = delta_c_prime / (K_C * s_c);
    let term_h = delta_big_h_prime / (K_H * s_h);

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
}

/// `sqrt(C⁷ / (C⁷ + 25⁷))`
#[inline]
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// Hue angle in [0, 360). The origin has no defined angle and maps to 0.
#[inline]
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Signed shortest-path hue difference `h2 - h1`, zero when either color is
/// achromatic.
#[inline]
fn hue_delta(h1: f64, h2: f64, chroma_product: f64) -> f64 {
    if chroma_product == 0.0 {
        return 0.0;
    }
    let diff = h2 - h1;
    if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// Circular mean hue. When either color is achromatic its hue is
/// meaningless and the plain sum is returned, as the reference formula does.
#[inline]
fn hue_mean(h1: f64, h2: f64, chroma_product: f64) -> f64 {
    let sum = h1 + h2;
    if chroma_product == 0.0 {
        sum
    } else if (h1 - h2).abs() <= 180.0 {
        sum / 2.0
    } else if sum < 360.0 {
        (sum + 360.0) / 2.0
    } else {
        (sum - 360.0) / 2.0
    }
}
