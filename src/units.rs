//! Human-readable byte sizes for the table renderers.

const KB: i64 = 1024;
const MB: i64 = 1024 * KB;
const GB: i64 = 1024 * MB;
const TB: i64 = 1024 * GB;
const PB: i64 = 1024 * TB;

/// Units from largest to smallest, excluding bare bytes.
const SCALES: [(i64, char); 5] = [(PB, 'P'), (TB, 'T'), (GB, 'G'), (MB, 'M'), (KB, 'K')];

/// Scale `bytes` into the largest binary unit it reaches.
///
/// Anything below one kibibyte is printed as an integer with a `B` suffix,
/// everything else with exactly three decimals, e.g. `1536` becomes `1.500K`.
pub fn convert_unit(bytes: i64) -> String {
    for (scale, suffix) in SCALES {
        if bytes >= scale {
            return format!("{:.3}{suffix}", bytes as f64 / scale as f64);
        }
    }
    format!("{bytes}B")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kibibyte_stay_integral() {
        assert_eq!(convert_unit(0), "0B");
        assert_eq!(convert_unit(1), "1B");
        assert_eq!(convert_unit(1023), "1023B");
    }

    #[test]
    fn kibibytes_use_three_decimals() {
        assert_eq!(convert_unit(1024), "1.000K");
        assert_eq!(convert_unit(1536), "1.500K");
        assert_eq!(convert_unit(12288), "12.000K");
    }

    #[test]
    fn larger_units_pick_the_biggest_whole_scale() {
        assert_eq!(convert_unit(MB), "1.000M");
        assert_eq!(convert_unit(MB - 1), "1023.999K");
        assert_eq!(convert_unit(3 * GB / 2), "1.500G");
        assert_eq!(convert_unit(TB), "1.000T");
        assert_eq!(convert_unit(2 * PB), "2.000P");
    }
}
