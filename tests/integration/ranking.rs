//! rank_records over the shared sample catalogue.

use super::common::{generate_records, ids, q, sample_records};
use seekr::{rank_records, FieldWeights, RankOptions, DEFAULT_PAGE_SIZE};

fn rank(raw: &str) -> seekr::RankedPage {
    rank_records(
        &sample_records(),
        &q(raw),
        &FieldWeights::default(),
        &RankOptions::default(),
    )
}

#[test]
fn test_name_and_description_scores_add_up() {
    let page = rank("париж");
    assert_eq!(ids(&page), ["paris-weekend"]);
    // name 5 × 3.0 + description 5 × 1.0
    assert_eq!(page.results[0].score, 20.0);
}

#[test]
fn test_heavier_field_ranks_first() {
    let page = rank("отдых");
    assert_eq!(ids(&page), ["budget-trip", "paris-weekend"]);
    assert_eq!(page.results[0].score, 20.0);
    assert_eq!(page.results[1].score, 5.0);
}

#[test]
fn test_exclusion_penalizes_only_the_field_containing_it() {
    let page = rank("отдых -недорого");
    assert_eq!(ids(&page), ["budget-trip", "paris-weekend"]);
    assert_eq!(page.results[0].score, 15.0);
}

#[test]
fn test_field_filter_and_text_gate() {
    let page = rank("парк status:published");
    // rust-newsletter passes the filter but has no text match.
    assert_eq!(ids(&page), ["moscow-parks", "paris-weekend"]);
    // name 4 × 3.0 + description 4 × 1.0 + status 9 × 0.5
    assert_eq!(page.results[0].score, 20.5);
    assert_eq!(page.results[1].score, 8.5);
}

#[test]
fn test_filter_only_query_lists_matching_records() {
    let page = rank("status:draft");
    assert_eq!(ids(&page), ["budget-trip"]);
}

#[test]
fn test_or_groups_are_satisfied_per_field() {
    let page = rank("rust OR newsletter");
    assert_eq!(ids(&page), ["rust-newsletter"]);
    // tags (4 + 10) × 2.0 + description (4 + 10) × 1.0
    assert_eq!(page.results[0].score, 42.0);
}

#[test]
fn test_diacritics_are_matched_as_written() {
    assert_eq!(ids(&rank("crème")), ["cafe-menu"]);
    assert_eq!(ids(&rank("café")), ["cafe-menu"]);
    assert!(rank("creme").results.is_empty());
}

#[test]
fn test_highlights_cover_every_matching_field() {
    let page = rank("париж");
    let top = &page.results[0];
    assert_eq!(top.highlights["name"], "<mark>Париж</mark> на выходные");
    assert_eq!(
        top.highlights["description"],
        "Отдых в <mark>Париж</mark>е: парк Монсо, Лувр и прогулка по Сене"
    );
    assert!(!top.highlights.contains_key("status"));
}

#[test]
fn test_custom_weights_change_the_order() {
    let weights = FieldWeights::empty().with("description", 10.0).with("name", 1.0);
    let page = rank_records(
        &sample_records(),
        &q("отдых"),
        &weights,
        &RankOptions::default(),
    );
    // budget-trip: 5 + 50, paris-weekend: 50
    assert_eq!(ids(&page), ["budget-trip", "paris-weekend"]);
    assert_eq!(page.results[1].score, 50.0);
}

#[test]
fn test_zero_weight_field_cannot_carry_a_match() {
    let weights = FieldWeights::empty().with("name", 0.0).with("description", 1.0);
    let page = rank_records(&sample_records(), &q("weekly"), &weights, &RankOptions::default());
    assert!(page.results.is_empty());
}

#[test]
fn test_pages_partition_the_results() {
    let records = generate_records(300, 20);
    let query = q("париж");
    let weights = FieldWeights::default();

    let all = rank_records(
        &records,
        &query,
        &weights,
        &RankOptions {
            limit: usize::MAX,
            ..RankOptions::default()
        },
    );
    assert!(all.total > DEFAULT_PAGE_SIZE, "fixture should match many records");

    let mut paged = Vec::new();
    let mut offset = 0;
    while offset < all.total {
        let page = rank_records(
            &records,
            &query,
            &weights,
            &RankOptions {
                offset,
                ..RankOptions::default()
            },
        );
        assert_eq!(page.total, all.total);
        assert!(page.results.len() <= DEFAULT_PAGE_SIZE);
        paged.extend(page.results.into_iter().map(|r| r.id));
        offset += DEFAULT_PAGE_SIZE;
    }

    let expected: Vec<String> = all.results.iter().map(|r| r.id.clone()).collect();
    assert_eq!(paged, expected);
}

#[test]
fn test_order_is_score_then_id() {
    let records = generate_records(200, 15);
    let page = rank_records(
        &records,
        &q("rust"),
        &FieldWeights::default(),
        &RankOptions {
            limit: usize::MAX,
            ..RankOptions::default()
        },
    );
    for pair in page.results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.id < b.id),
            "{} ({}) before {} ({})",
            a.id,
            a.score,
            b.id,
            b.score
        );
    }
}

#[test]
fn test_offset_past_the_end_is_empty() {
    let page = rank_records(
        &sample_records(),
        &q("париж"),
        &FieldWeights::default(),
        &RankOptions {
            offset: 10,
            ..RankOptions::default()
        },
    );
    assert_eq!(page.total, 1);
    assert!(page.results.is_empty());
}
