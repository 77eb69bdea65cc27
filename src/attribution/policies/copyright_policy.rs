/// CopyrightPolicy for rendering and backfilling copyright years
///
/// Rules:
/// 1. No years → the current year
/// 2. One year, or an unbroken run of years → `Copyright 2001` / `Copyright 2001-2004`
/// 3. Anything else → comma-joined ascending years (`Copyright 2001,2003`)
///
/// Archive timestamps at or before the zip epoch (1980) are placeholders left
/// by reproducible builds and never count as a copyright year.
pub struct CopyrightPolicy;

impl CopyrightPolicy {
    /// Year the zip format uses for "no timestamp"
    pub const ZIP_EPOCH_YEAR: i32 = 1980;

    /// Formats the copyright line for a record
    ///
    /// # Arguments
    /// * `years` - Copyright years in any order, possibly with repeats
    /// * `current_year` - Year used when `years` is empty
    pub fn format_line(years: &[i32], current_year: i32) -> String {
        let mut years: Vec<i32> = years.iter().copied().filter(|y| *y > 0).collect();
        years.sort_unstable();
        years.dedup();

        match years.as_slice() {
            [] => format!("Copyright {}", current_year),
            [single] => format!("Copyright {}", single),
            [first, .., last] if Self::is_unbroken(&years) => {
                format!("Copyright {}-{}", first, last)
            }
            _ => {
                let joined: Vec<String> = years.iter().map(i32::to_string).collect();
                format!("Copyright {}", joined.join(","))
            }
        }
    }

    /// Picks the year to backfill onto a record without one
    ///
    /// Returns the oldest plausible archive year, or `current_year` when no
    /// archive provided one.
    pub fn backfill_year<I>(archive_years: I, current_year: i32) -> i32
    where
        I: IntoIterator<Item = i32>,
    {
        archive_years
            .into_iter()
            .filter(|year| *year > Self::ZIP_EPOCH_YEAR)
            .min()
            .unwrap_or(current_year)
    }

    fn is_unbroken(sorted_years: &[i32]) -> bool {
        sorted_years.windows(2).all(|pair| pair[1] == pair[0] + 1)
    }
}
