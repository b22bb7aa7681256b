use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use testlet::config::AppConfig;
use testlet::{Item, ItemType, Testlet, TestletError, ValidationError};

const HEAD_LEN: usize = 2;
const TAIL_LEN: usize = 8;

/// Build items with ids item-1.. in the given type order
fn arrange_items(counts: &[(ItemType, usize)]) -> Vec<Item> {
    let mut id = 1;
    let mut items = Vec::new();
    for &(item_type, n) in counts {
        for _ in 0..n {
            items.push(Item::new(format!("item-{}", id), item_type));
            id += 1;
        }
    }
    items
}

fn reference_items() -> Vec<Item> {
    arrange_items(&[(ItemType::Pretest, 4), (ItemType::Operational, 6)])
}

fn sorted(items: &[Item]) -> Vec<Item> {
    let mut v = items.to_vec();
    v.sort_by(|a, b| a.item_id().cmp(b.item_id()));
    v
}

#[test]
fn qa_tc_reference_scenario() {
    let items = reference_items();
    let testlet = Testlet::new("testlet-id", items.clone()).unwrap();

    let result = testlet.randomize();

    // Same multiset of (id, type)
    assert_eq!(sorted(&result), sorted(&items));

    // Head: 2 of the original 4 pretest items
    let head = &result[..HEAD_LEN];
    assert!(head.iter().all(|i| i.item_type() == ItemType::Pretest));
    assert_ne!(head[0].item_id(), head[1].item_id());

    // Tail: the other 2 pretest + all 6 operational
    let tail = &result[HEAD_LEN..];
    assert_eq!(tail.len(), TAIL_LEN);
    let tail_pretest = tail.iter().filter(|i| i.is_type(ItemType::Pretest)).count();
    let tail_operational = tail
        .iter()
        .filter(|i| i.is_type(ItemType::Operational))
        .count();
    assert_eq!(tail_pretest, 2);
    assert_eq!(tail_operational, 6);
}

#[test]
fn qa_tc_layout_holds_over_many_trials() {
    let testlet = Testlet::new("testlet-id", reference_items()).unwrap();
    let mut rng = StdRng::seed_from_u64(0x7e57_1e7);
    let expected = sorted(testlet.items());

    let mut mixed_tails = 0;
    for _ in 0..1000 {
        let result = testlet.randomize_with(&mut rng);

        assert_eq!(sorted(&result), expected);
        assert!(result[..HEAD_LEN].iter().all(|i| i.is_type(ItemType::Pretest)));

        let tail = &result[HEAD_LEN..];
        if tail.iter().any(|i| i.is_type(ItemType::Pretest))
            && tail.iter().any(|i| i.is_type(ItemType::Operational))
        {
            mixed_tails += 1;
        }
    }

    assert!(mixed_tails > 0, "tail should mix pretest and operational items");
}

#[test]
fn qa_tc_successive_calls_reorder() {
    let testlet = Testlet::new("testlet-id-01", reference_items()).unwrap();

    let first = testlet.randomize();

    // Retry to tolerate the occasional identical draw
    let mut reordered = false;
    for _ in 0..5 {
        let again = testlet.randomize();
        assert_eq!(sorted(&first), sorted(&again));
        if again != first {
            reordered = true;
            break;
        }
    }

    assert!(reordered, "successive randomizations should differ");
}

#[test]
fn qa_tc_head_pairs_are_uniform() {
    let testlet = Testlet::new("testlet-id", reference_items()).unwrap();
    let mut rng = StdRng::seed_from_u64(12345);
    const TRIALS: usize = 12_000;

    let mut pairs: HashMap<(String, String), usize> = HashMap::new();
    for _ in 0..TRIALS {
        let result = testlet.randomize_with(&mut rng);
        let key = (
            result[0].item_id().to_string(),
            result[1].item_id().to_string(),
        );
        *pairs.entry(key).or_insert(0) += 1;
    }

    // 4 * 3 ordered pairs, ~1000 each
    assert_eq!(pairs.len(), 12);
    for (pair, count) in &pairs {
        assert!(
            (850..=1150).contains(count),
            "ordered pair {:?} drawn {} times",
            pair,
            count
        );
    }
}

#[test]
fn qa_tc_tail_positions_are_uniform() {
    let testlet = Testlet::new("testlet-id", reference_items()).unwrap();
    let mut rng = StdRng::seed_from_u64(777);
    const TRIALS: usize = 16_000;

    let mut first_tail: HashMap<String, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let result = testlet.randomize_with(&mut rng);
        *first_tail
            .entry(result[HEAD_LEN].item_id().to_string())
            .or_insert(0) += 1;
    }

    // Operational items are always in the tail: 1/8 each, ~2000.
    // Pretest items reach the tail half the time: 1/16 each, ~1000.
    for item in testlet.items() {
        let count = first_tail.get(item.item_id()).copied().unwrap_or(0);
        let range = match item.item_type() {
            ItemType::Operational => 1800..=2200,
            ItemType::Pretest => 850..=1150,
        };
        assert!(
            range.contains(&count),
            "{} led the tail {} times",
            item,
            count
        );
    }
}

#[test]
fn qa_tc_wrong_items_rejected() {
    let cases = vec![
        Vec::new(),
        arrange_items(&[(ItemType::Operational, 10)]),
        arrange_items(&[(ItemType::Pretest, 10)]),
        arrange_items(&[(ItemType::Operational, 4), (ItemType::Pretest, 6)]),
        arrange_items(&[(ItemType::Pretest, 2), (ItemType::Operational, 8)]),
        arrange_items(&[(ItemType::Pretest, 4), (ItemType::Operational, 5)]),
    ];

    for items in cases {
        let n = items.len();
        let err = Testlet::new("test-id", items).unwrap_err();
        assert!(
            err.to_string().starts_with("wrong number of items"),
            "{} items: unexpected error {}",
            n,
            err
        );
    }
}

#[test]
fn qa_tc_wrong_split_names_the_type() {
    let items = arrange_items(&[(ItemType::Operational, 8), (ItemType::Pretest, 2)]);

    let err = Testlet::new("test-id", items).unwrap_err();

    assert_eq!(
        err.to_string(),
        "wrong number of items of type Pretest: expected 4, got 2"
    );
    assert!(matches!(
        err,
        TestletError::Validation(ValidationError::WrongItemTypeCount {
            item_type: ItemType::Pretest,
            ..
        })
    ));
}

#[test]
fn qa_tc_wrong_total_reports_counts() {
    let items = arrange_items(&[(ItemType::Pretest, 4), (ItemType::Operational, 7)]);

    let err = Testlet::new("test-id", items).unwrap_err();

    assert_eq!(err.to_string(), "wrong number of items: expected 10, got 11");
}

#[test]
fn qa_tc_absent_arguments_rejected() {
    let cases = [
        Testlet::builder().build(),
        Testlet::builder().testlet_id("testlet-id").build(),
        Testlet::builder().items(Vec::new()).build(),
    ];

    for result in cases {
        assert!(matches!(
            result,
            Err(TestletError::InvalidArgument { .. })
        ));
    }
}

#[test]
fn qa_tc_dev_config_and_fixture() {
    let config = AppConfig::load("dev").unwrap();
    let content = std::fs::read_to_string("fixtures/items.yaml").unwrap();
    let items: Vec<Item> = serde_yaml::from_str(&content).unwrap();

    let testlet = Testlet::with_config("fixture", items, config.testlet).unwrap();
    let result = testlet.randomize_with(&mut StdRng::seed_from_u64(1));

    assert_eq!(result.len(), 10);
    assert!(result[..HEAD_LEN].iter().all(|i| i.is_type(ItemType::Pretest)));
}
