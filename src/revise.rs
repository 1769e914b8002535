// Context-sensitive revision: short and near-good paragraphs take their final
// class from the surrounding good/bad paragraphs.

use crate::config::Config;
use crate::paragraph::{ClassType, Paragraph};

/// Resolve every short and near-good paragraph to good or bad.
///
/// Expects `cf_class` to be set. Runs one backward scan to precompute what
/// follows each paragraph, one forward scan that finalizes classes, and
/// (unless `config.no_headings`) one backward scan promoting headings that
/// introduce good content. Linear in the number of paragraphs.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn revise_paragraph_classification(paragraphs: &mut [Paragraph], config: &Config) {
    let headings = !config.no_headings;
    let lookahead = Lookahead::scan(paragraphs);

    // Nearest preceding paragraph already finalized as good or bad.
    let mut prev = ClassType::Bad;
    for (i, paragraph) in paragraphs.iter_mut().enumerate() {
        let next = lookahead.next_settled[i];
        let class = match paragraph.cf_class {
            settled @ (ClassType::Good | ClassType::Bad) => settled,
            _ if paragraph.len() >= config.length_high => ClassType::Good,
            ClassType::Short => match (prev, next) {
                (ClassType::Good, ClassType::Good) => ClassType::Good,
                (ClassType::Bad, ClassType::Bad) => ClassType::Bad,
                _ if headings
                    && paragraph.heading
                    && within(lookahead.gap_to_good[i], config.max_heading_distance) =>
                {
                    ClassType::NearGood
                }
                _ => ClassType::Bad,
            },
            ClassType::NearGood => {
                if prev == ClassType::Good || next == ClassType::Good {
                    ClassType::Good
                } else {
                    ClassType::Bad
                }
            }
        };
        paragraph.class_type = class;
        if class.is_settled() {
            prev = class;
        }
    }

    let promoted = if headings {
        promote_headings(paragraphs, config.max_heading_distance)
    } else {
        0
    };

    debug!(
        paragraphs = paragraphs.len(),
        counts = ?crate::paragraph::ClassCounts::tally(paragraphs.iter().map(|p| p.class_type)),
        promoted,
        "revised paragraph classes"
    );
}

/// What follows each paragraph, by context-free class.
struct Lookahead {
    /// Context-free class of the nearest following good or bad paragraph
    /// (bad past the end of the document).
    next_settled: Vec<ClassType>,
    /// Chars between the paragraph and the nearest following context-free
    /// good paragraph, if there is one.
    gap_to_good: Vec<Option<usize>>,
}

impl Lookahead {
    fn scan(paragraphs: &[Paragraph]) -> Self {
        let n = paragraphs.len();
        let mut next_settled = vec![ClassType::Bad; n];
        let mut gap_to_good = vec![None; n];
        let mut settled = ClassType::Bad;
        let mut gap = None;
        for (i, p) in paragraphs.iter().enumerate().rev() {
            next_settled[i] = settled;
            gap_to_good[i] = gap;
            if p.cf_class.is_settled() {
                settled = p.cf_class;
            }
            gap = advance_gap(gap, p, p.cf_class == ClassType::Good);
        }
        Self {
            next_settled,
            gap_to_good,
        }
    }
}

/// Walking backwards past `p`: reset at a good paragraph, else add its length.
fn advance_gap(gap: Option<usize>, p: &Paragraph, good: bool) -> Option<usize> {
    if good {
        Some(0)
    } else {
        gap.map(|g| g.saturating_add(p.len()))
    }
}

fn within(gap: Option<usize>, max_distance: usize) -> bool {
    gap.is_some_and(|g| g <= max_distance)
}

/// Raise to good every heading followed by good content within
/// `max_distance` chars. Distances are measured against the classes the
/// forward pass produced, so one promotion never enables another.
fn promote_headings(paragraphs: &mut [Paragraph], max_distance: usize) -> usize {
    let mut promoted = 0;
    let mut gap = None;
    for p in paragraphs.iter_mut().rev() {
        let was_good = p.class_type == ClassType::Good;
        if p.heading && p.cf_class != ClassType::Good && !was_good && within(gap, max_distance) {
            trace!(xpath = %p.xpath, from = %p.class_type, "heading promoted");
            p.class_type = ClassType::Good;
            promoted += 1;
        }
        gap = advance_gap(gap, p, was_good);
    }
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::ClassType::{Bad, Good, NearGood, Short};
    use rstest::rstest;

    fn para_len(cf: ClassType, len: usize) -> Paragraph {
        let mut p = Paragraph::new(
            "html.body.p".to_string(),
            "/html[1]/body[1]/p[1]".to_string(),
            "x".repeat(len),
            false,
            0,
            0,
        );
        p.cf_class = cf;
        p.class_type = cf;
        p
    }

    fn para(cf: ClassType) -> Paragraph {
        para_len(cf, 10)
    }

    fn heading(cf: ClassType) -> Paragraph {
        let mut p = para(cf);
        p.dom_path = "html.body.h2".to_string();
        p.heading = true;
        p
    }

    fn revise(mut ps: Vec<Paragraph>, config: &Config) -> Vec<ClassType> {
        revise_paragraph_classification(&mut ps, config);
        ps.into_iter().map(|p| p.class_type).collect()
    }

    fn finals(classes: &[ClassType]) -> Vec<ClassType> {
        revise(classes.iter().map(|&c| para(c)).collect(), &Config::default())
    }

    #[rstest]
    #[case(&[Good, Short, Good], &[Good, Good, Good])]
    #[case(&[Bad, Short, Bad], &[Bad, Bad, Bad])]
    #[case(&[Good, Short, Bad], &[Good, Bad, Bad])]
    #[case(&[Bad, Short, Good], &[Bad, Bad, Good])]
    #[case(&[Bad, NearGood, Bad], &[Bad, Bad, Bad])]
    #[case(&[Good, NearGood, Bad], &[Good, Good, Bad])]
    #[case(&[Bad, NearGood, Good], &[Bad, Good, Good])]
    #[case(&[Short], &[Bad])]
    #[case(&[NearGood], &[Bad])]
    #[case(&[Short, Good], &[Bad, Good])]
    #[case(&[Good, NearGood], &[Good, Good])]
    #[case(&[Good, Short, Short, Good], &[Good, Good, Good, Good])]
    fn test_neighbor_resolution(#[case] cf: &[ClassType], #[case] expected: &[ClassType]) {
        assert_eq!(finals(cf), expected);
    }

    #[test]
    fn test_previous_neighbor_is_finalized_class() {
        // The near-good resolves to good first, so the short sees good on both sides.
        assert_eq!(
            finals(&[Bad, NearGood, Short, Good]),
            vec![Bad, Good, Good, Good]
        );
    }

    #[test]
    fn test_next_neighbor_is_context_free_class() {
        // The short skips the following near-good and sees bad ahead; the
        // near-good then sees the short's final bad behind it.
        assert_eq!(
            finals(&[Good, Short, NearGood, Bad]),
            vec![Good, Bad, Bad, Bad]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert!(finals(&[]).is_empty());
    }

    #[test]
    fn test_long_paragraph_trusted() {
        let config = Config::default();
        let ps = vec![para(Bad), para_len(NearGood, 200), para(Bad)];
        assert_eq!(revise(ps, &config), vec![Bad, Good, Bad]);

        // Short can only reach length_high when length_low exceeds it.
        let config = Config::default().with_length_low(500).with_length_high(50);
        let ps = vec![para(Bad), para_len(Short, 60), para(Bad)];
        assert_eq!(revise(ps, &config), vec![Bad, Good, Bad]);
    }

    #[test]
    fn test_short_heading_before_good_kept() {
        let ps = vec![para(Bad), heading(Short), para(Good)];
        assert_eq!(revise(ps, &Config::default()), vec![Bad, Good, Good]);
    }

    #[test]
    fn test_short_heading_with_headings_disabled() {
        let config = Config::default().with_no_headings(true);
        let ps = vec![para(Bad), heading(Short), para(Good)];
        assert_eq!(revise(ps, &config), vec![Bad, Bad, Good]);
    }

    #[rstest]
    #[case(200, Good)]
    #[case(201, Bad)]
    fn test_heading_distance_window(#[case] filler: usize, #[case] expected: ClassType) {
        let ps = vec![heading(Short), para_len(Bad, filler), para(Good)];
        let out = revise(ps, &Config::default());
        assert_eq!(out[0], expected);
    }

    #[test]
    fn test_heading_distance_configurable() {
        let config = Config::default().with_max_heading_distance(5);
        let ps = vec![heading(Short), para_len(Bad, 10), para(Good)];
        assert_eq!(revise(ps, &config)[0], Bad);
    }

    #[test]
    fn test_bad_heading_promoted() {
        let ps = vec![heading(Bad), para(Good)];
        assert_eq!(revise(ps, &Config::default()), vec![Good, Good]);
    }

    #[test]
    fn test_heading_promotion_does_not_cascade() {
        // The second heading is promoted, but the first measures its distance
        // against the pre-promotion classes: 150 + 100 > 200.
        let mut second = heading(Short);
        second.text = "x".repeat(150);
        let ps = vec![heading(Short), second, para_len(Bad, 100), para(Good)];
        assert_eq!(revise(ps, &Config::default()), vec![Bad, Good, Bad, Good]);
    }

    #[test]
    fn test_heading_without_following_good_stays_bad() {
        let ps = vec![para(Good), heading(Short), para(Bad)];
        assert_eq!(revise(ps, &Config::default()), vec![Good, Bad, Bad]);
    }

    #[test]
    fn test_every_short_sequence_settles() {
        // All 4-paragraph sequences, every heading mask, both heading modes.
        let classes = [Good, NearGood, Short, Bad];
        for no_headings in [false, true] {
            let config = Config::default().with_no_headings(no_headings);
            for code in 0..256usize {
                for mask in 0..16usize {
                    let ps: Vec<Paragraph> = (0..4)
                        .map(|k| {
                            let cf = classes[(code >> (2 * k)) & 3];
                            if mask & (1 << k) != 0 {
                                heading(cf)
                            } else {
                                para(cf)
                            }
                        })
                        .collect();
                    let cfs: Vec<ClassType> = ps.iter().map(|p| p.cf_class).collect();
                    let out = revise(ps, &config);
                    for (k, (&cf, &fin)) in cfs.iter().zip(&out).enumerate() {
                        assert!(fin == Good || fin == Bad, "{cfs:?} -> {out:?}");
                        if cf == Good {
                            assert_eq!(fin, Good, "good never downgraded: {cfs:?}");
                        }
                        if cf == Bad && (mask & (1 << k) == 0 || no_headings) {
                            assert_eq!(fin, Bad, "only headings leave bad: {cfs:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_lookahead() {
        let ps = vec![para(Short), para(NearGood), para_len(Bad, 7), para(Good), para(Short)];
        let la = Lookahead::scan(&ps);
        assert_eq!(la.next_settled, vec![Bad, Bad, Good, Bad, Bad]);
        assert_eq!(la.gap_to_good, vec![Some(17), Some(7), Some(0), None, None]);
    }
}
