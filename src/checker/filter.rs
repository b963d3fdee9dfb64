/// Narrows a stats run to part of the manuscript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChapterFilter {
    /// Keep only chapters with fewer characters than this.
    pub below: Option<usize>,
    /// Skip chapters in volumes numbered lower than this.
    pub from_volume: Option<u32>,
}

impl ChapterFilter {
    /// Volume number from the first `第<digits>卷` in a path, e.g. `第9卷_墜落地/第281章.md`.
    ///
    /// ASCII and full-width digits are accepted (`第９卷`). Chinese numerals
    /// (`第九卷`) and digits from other scripts are not volume markers.
    #[must_use]
    pub fn volume_of(path: &str) -> Option<u32> {
        path.match_indices('第').find_map(|(index, marker)| {
            let mut volume: Option<u32> = None;
            for c in path[index + marker.len()..].chars() {
                match digit_value(c) {
                    Some(digit) => {
                        volume = Some(volume.unwrap_or(0).checked_mul(10)?.checked_add(digit)?);
                    }
                    None => return volume.filter(|_| c == '卷'),
                }
            }
            None
        })
    }

    /// Decided before the file is read. Paths without a volume marker are kept.
    #[must_use]
    pub fn keeps_path(&self, display_path: &str) -> bool {
        match (self.from_volume, Self::volume_of(display_path)) {
            (Some(limit), Some(volume)) if limit > 0 => volume >= limit,
            _ => true,
        }
    }

    #[must_use]
    pub fn keeps_count(&self, count: usize) -> bool {
        self.below.is_none_or(|below| count < below)
    }
}

/// Decimal value of an ASCII or full-width digit.
fn digit_value(c: char) -> Option<u32> {
    c.to_digit(10).or_else(|| match c {
        '０'..='９' => Some(u32::from(c) - u32::from('０')),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_number_is_parsed_from_path() {
        assert_eq!(ChapterFilter::volume_of("第9卷_墜落地/第281章.md"), Some(9));
        assert_eq!(ChapterFilter::volume_of("S2-深淵篇/第12卷/第3章.md"), Some(12));
    }

    #[test]
    fn chapter_marker_is_not_a_volume() {
        assert_eq!(ChapterFilter::volume_of("第281章-男爵的獵犬.md"), None);
        assert_eq!(ChapterFilter::volume_of("序章.md"), None);
    }

    #[test]
    fn first_volume_marker_wins() {
        assert_eq!(ChapterFilter::volume_of("第3章/第4卷/x.md"), Some(4));
        assert_eq!(ChapterFilter::volume_of("第2卷/第5卷.md"), Some(2));
    }

    #[test]
    fn full_width_digits_are_parsed() {
        assert_eq!(ChapterFilter::volume_of("第９卷/第1章.md"), Some(9));
        assert_eq!(ChapterFilter::volume_of("第１２卷/第1章.md"), Some(12));
        assert_eq!(ChapterFilter::volume_of("第1２卷/x.md"), Some(12));
    }

    #[test]
    fn overflowing_volume_number_is_ignored() {
        assert_eq!(ChapterFilter::volume_of("第99999999999卷/第2卷/x.md"), Some(2));
    }

    #[test]
    fn chinese_numeral_volume_not_parsed() {
        assert_eq!(ChapterFilter::volume_of("第九卷/第1章.md"), None);
    }

    #[test]
    fn from_volume_skips_earlier_volumes() {
        let filter = ChapterFilter {
            from_volume: Some(9),
            ..ChapterFilter::default()
        };
        assert!(!filter.keeps_path("第8卷/第1章.md"));
        assert!(filter.keeps_path("第9卷/第1章.md"));
        assert!(filter.keeps_path("第10卷/第1章.md"));
        assert!(filter.keeps_path("番外/後記.md"));
    }

    #[test]
    fn zero_volume_limit_keeps_everything() {
        let filter = ChapterFilter {
            from_volume: Some(0),
            ..ChapterFilter::default()
        };
        assert!(filter.keeps_path("第1卷/第1章.md"));
    }

    #[test]
    fn below_keeps_only_short_chapters() {
        let filter = ChapterFilter {
            below: Some(3000),
            ..ChapterFilter::default()
        };
        assert!(filter.keeps_count(2999));
        assert!(!filter.keeps_count(3000));
    }

    #[test]
    fn default_filter_keeps_all() {
        let filter = ChapterFilter::default();
        assert!(filter.keeps_path("第1卷/a.md"));
        assert!(filter.keeps_count(usize::MAX));
    }
}
