//! Exact decimal arithmetic used for rounding.
//!
//! Numbers are held as digit vectors so rounding, percent scaling and compact
//! tiering never pass through binary floating point. Floats enter through
//! their shortest round-trip text, which is what `Display` prints.

use crate::value::NumberValue;

/// Largest exponent accepted in textual input before the value is treated as
/// infinite (or zero, for negative exponents).
const MAX_TEXT_EXPONENT: i64 = 1000;

/// Unsigned digits plus a sign flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decimal {
    pub negative: bool,
    /// Integer digits, most significant first, without leading zeros.
    pub int: Vec<u8>,
    /// Fraction digits, most significant first.
    pub frac: Vec<u8>,
}

/// Result of reading a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Finite(Decimal),
    Infinite { negative: bool },
    NaN,
}

impl Parsed {
    pub fn from_value(value: &NumberValue) -> Parsed {
        match value {
            NumberValue::Number(n) => Parsed::from_f64(*n),
            NumberValue::Text(s) => Parsed::from_text(s),
        }
    }

    pub fn from_f64(x: f64) -> Parsed {
        if x.is_nan() {
            return Parsed::NaN;
        }
        if x.is_infinite() {
            return Parsed::Infinite {
                negative: x < 0.0,
            };
        }
        let text = format!("{}", x.abs());
        match parse_unsigned(&text) {
            Some(Parsed::Finite(mut d)) => {
                d.negative = x.is_sign_negative();
                Parsed::Finite(d)
            }
            // Display never prints an exponent or anything non-decimal.
            _ => Parsed::NaN,
        }
    }

    pub fn from_text(s: &str) -> Parsed {
        let t = s.trim();
        if t.is_empty() {
            return Parsed::Finite(Decimal::default());
        }
        let (negative, body) = match t.as_bytes()[0] {
            b'-' => (true, &t[1..]),
            b'+' => (false, &t[1..]),
            _ => (false, t),
        };
        if body == "Infinity" {
            return Parsed::Infinite { negative };
        }
        match parse_unsigned(body) {
            Some(Parsed::Finite(mut d)) => {
                d.negative = negative;
                Parsed::Finite(d)
            }
            Some(Parsed::Infinite { .. }) => Parsed::Infinite { negative },
            _ => Parsed::NaN,
        }
    }
}

/// `digits [. digits] [e [+-] digits]` or `. digits [...]`, no sign.
fn parse_unsigned(s: &str) -> Option<Parsed> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut int = Vec::new();
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        int.push(bytes[i] - b'0');
        i += 1;
    }
    let mut frac = Vec::new();
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            frac.push(bytes[i] - b'0');
            i += 1;
        }
    }
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    let mut exponent: i64 = 0;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        let mut exp_negative = false;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            exp_negative = bytes[i] == b'-';
            i += 1;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            exponent = (exponent * 10 + (bytes[i] - b'0') as i64).min(MAX_TEXT_EXPONENT + 1);
            i += 1;
        }
        if i == start {
            return None;
        }
        if exp_negative {
            exponent = -exponent;
        }
    }
    if i != bytes.len() {
        return None;
    }

    let mut d = Decimal {
        negative: false,
        int,
        frac,
    };
    d.strip_leading_zeros();
    if exponent > MAX_TEXT_EXPONENT {
        return Some(if d.is_zero() {
            Parsed::Finite(Decimal::default())
        } else {
            Parsed::Infinite { negative: false }
        });
    }
    if exponent < -MAX_TEXT_EXPONENT {
        return Some(Parsed::Finite(Decimal::default()));
    }
    if exponent >= 0 {
        d.shift_left(exponent as usize);
    } else {
        d.shift_right((-exponent) as usize);
    }
    Some(Parsed::Finite(d))
}

impl Decimal {
    pub fn is_zero(&self) -> bool {
        self.int.iter().chain(self.frac.iter()).all(|&d| d == 0)
    }

    /// Count of integer digits, or the negated count of leading fraction
    /// zeros when the integer part is empty. Zero reports 0.
    pub fn magnitude(&self) -> i32 {
        if !self.int.is_empty() {
            return self.int.len() as i32;
        }
        match self.frac.iter().position(|&d| d != 0) {
            Some(pos) => -(pos as i32),
            None => 0,
        }
    }

    fn strip_leading_zeros(&mut self) {
        let lead = self.int.iter().take_while(|&&d| d == 0).count();
        self.int.drain(..lead);
    }

    /// Multiply by 10^n.
    pub fn shift_left(&mut self, n: usize) {
        let take = n.min(self.frac.len());
        self.int.extend(self.frac.drain(..take));
        self.int.extend(std::iter::repeat(0).take(n - take));
        self.strip_leading_zeros();
    }

    /// Divide by 10^n.
    pub fn shift_right(&mut self, n: usize) {
        let take = n.min(self.int.len());
        let moved = self.int.split_off(self.int.len() - take);
        let mut frac = vec![0; n - take];
        frac.extend(moved);
        frac.append(&mut self.frac);
        self.frac = frac;
        self.strip_leading_zeros();
    }

    /// Round half away from zero so that at most `p` fraction digits remain.
    /// A negative `p` rounds to tens, hundreds and so on.
    pub fn round_at(&mut self, p: i32) {
        let mut digits: Vec<u8> = self.int.iter().chain(self.frac.iter()).copied().collect();
        let mut point = self.int.len() as i64;
        let mut keep = point + p as i64;
        if keep < 0 {
            self.int.clear();
            self.frac.clear();
            return;
        }
        if keep as usize >= digits.len() {
            return;
        }
        if keep == 0 {
            digits.insert(0, 0);
            point += 1;
            keep += 1;
        }
        let keep = keep as usize;
        let round_up = digits[keep] >= 5;
        digits.truncate(keep);
        if round_up {
            let mut carry = true;
            for d in digits.iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                digits.insert(0, 1);
                point += 1;
            }
        }
        let point = point as usize;
        if digits.len() < point {
            digits.resize(point, 0);
        }
        self.frac = digits.split_off(point);
        self.int = digits;
        self.strip_leading_zeros();
    }

    /// Round to `sig` significant digits.
    pub fn round_significant(&mut self, sig: u32) {
        if self.is_zero() {
            return;
        }
        let p = sig as i32 - self.magnitude();
        self.round_at(p);
    }

    /// Drop trailing fraction zeros down to `min` digits, then pad up to it.
    pub fn fit_fraction(&mut self, min: usize) {
        while self.frac.len() > min && self.frac.last() == Some(&0) {
            self.frac.pop();
        }
        while self.frac.len() < min {
            self.frac.push(0);
        }
    }

    /// Left-pad the integer digits with zeros to `min` digits.
    pub fn pad_integer(&mut self, min: usize) {
        if self.int.len() < min {
            let mut int = vec![0; min - self.int.len()];
            int.append(&mut self.int);
            self.int = int;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(p: Parsed) -> Decimal {
        match p {
            Parsed::Finite(d) => d,
            other => panic!("expected finite, got {other:?}"),
        }
    }

    fn render(d: &Decimal) -> String {
        let mut s: String = d.int.iter().map(|d| (b'0' + d) as char).collect();
        if s.is_empty() {
            s.push('0');
        }
        if !d.frac.is_empty() {
            s.push('.');
            s.extend(d.frac.iter().map(|d| (b'0' + d) as char));
        }
        s
    }

    #[test]
    fn floats_use_shortest_representation() {
        let d = finite(Parsed::from_f64(1.005));
        assert_eq!(render(&d), "1.005");
        let d = finite(Parsed::from_f64(-0.0));
        assert!(d.negative);
        assert!(d.is_zero());
        assert_eq!(Parsed::from_f64(f64::NAN), Parsed::NaN);
        assert_eq!(
            Parsed::from_f64(f64::NEG_INFINITY),
            Parsed::Infinite { negative: true }
        );
    }

    #[test]
    fn text_with_exponent_shifts_digits() {
        assert_eq!(render(&finite(Parsed::from_text("1.5e3"))), "1500");
        assert_eq!(render(&finite(Parsed::from_text("-25e-3"))), "0.025");
        assert_eq!(render(&finite(Parsed::from_text(".5"))), "0.5");
        assert_eq!(Parsed::from_text("1.2.3"), Parsed::NaN);
        assert_eq!(Parsed::from_text("e5"), Parsed::NaN);
        assert_eq!(
            Parsed::from_text("1e5000"),
            Parsed::Infinite { negative: false }
        );
    }

    #[test]
    fn rounding_is_half_expand() {
        let mut d = finite(Parsed::from_f64(1.005));
        d.round_at(2);
        assert_eq!(render(&d), "1.01");

        let mut d = finite(Parsed::from_f64(0.25));
        d.round_at(1);
        assert_eq!(render(&d), "0.3");

        let mut d = finite(Parsed::from_f64(9.999));
        d.round_at(2);
        assert_eq!(render(&d), "10.00");

        let mut d = finite(Parsed::from_f64(0.4));
        d.round_at(0);
        assert_eq!(render(&d), "0");
    }

    #[test]
    fn rounding_to_negative_positions() {
        let mut d = finite(Parsed::from_f64(1250.0));
        d.round_at(-2);
        assert_eq!(render(&d), "1300");

        let mut d = finite(Parsed::from_f64(960.0));
        d.round_at(-3);
        assert_eq!(render(&d), "1000");

        let mut d = finite(Parsed::from_f64(40.0));
        d.round_at(-3);
        assert_eq!(render(&d), "0");
    }

    #[test]
    fn significant_rounding() {
        let mut d = finite(Parsed::from_f64(1.234));
        d.round_significant(2);
        assert_eq!(render(&d), "1.2");

        let mut d = finite(Parsed::from_f64(0.0127));
        d.round_significant(2);
        assert_eq!(render(&d), "0.013");

        let mut d = finite(Parsed::from_f64(9.96));
        d.round_significant(2);
        d.fit_fraction(0);
        assert_eq!(render(&d), "10");
    }

    #[test]
    fn shifting_moves_the_point() {
        let mut d = finite(Parsed::from_f64(0.125));
        d.shift_left(2);
        assert_eq!(render(&d), "12.5");
        d.shift_right(4);
        assert_eq!(render(&d), "0.00125");
        d.fit_fraction(0);
        d.pad_integer(3);
        assert_eq!(render(&d), "000.00125");
    }
}
