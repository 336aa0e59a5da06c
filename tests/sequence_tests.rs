//! End-to-end operator-chain tests against the fluent `Sequence` facade.

use std::cell::Cell;
use std::rc::Rc;

use seqlinq::{Error, Sequence};

#[derive(Debug, Clone, PartialEq)]
struct Book {
    title: &'static str,
    genre: &'static str,
}

fn shelf() -> Vec<Book> {
    vec![
        Book {
            title: "The Tombs of Atuan",
            genre: "Fantasy",
        },
        Book {
            title: "Persuasion",
            genre: "Romance",
        },
        Book {
            title: "The Fifth Season",
            genre: "Fantasy",
        },
    ]
}

#[test]
fn where_keeps_matching_elements_in_source_order() {
    let fantasy: Vec<Book> = Sequence::from_values(shelf())
        .where_(|book| book.genre == "Fantasy")
        .collect();
    assert_eq!(
        fantasy.iter().map(|b| b.title).collect::<Vec<_>>(),
        vec!["The Tombs of Atuan", "The Fifth Season"]
    );
}

#[test]
fn count_after_where_matches_the_number_of_hits() {
    let hits = Sequence::from_values(shelf())
        .where_(|book| book.genre == "Fantasy")
        .count();
    assert_eq!(hits, 2);
}

#[test]
fn skip_take_yields_a_contiguous_window() {
    let window: Vec<i32> = Sequence::from_source(0..10).skip(3).take(4).collect();
    assert_eq!(window, vec![3, 4, 5, 6]);
}

#[test]
fn skip_take_truncates_on_a_short_sequence() {
    let window: Vec<i32> = Sequence::from_source(0..10).skip(8).take(5).collect();
    assert_eq!(window, vec![8, 9]);

    let empty: Vec<i32> = Sequence::from_source(0..3).skip(7).take(2).collect();
    assert_eq!(empty, Vec::<i32>::new());
}

#[test]
fn order_by_sorts_lexicographically() {
    let sorted: Vec<&str> = Sequence::from_values(vec!["z", "g", "a", "n"])
        .order_by(|a, b| a.cmp(b))
        .collect();
    assert_eq!(sorted, vec!["a", "g", "n", "z"]);
}

#[test]
fn order_by_is_stable_for_equal_keys() {
    let pairs = vec![(2, "a"), (1, "b"), (2, "c"), (1, "d")];
    let sorted: Vec<(i32, &str)> = Sequence::from_values(pairs)
        .order_by(|a, b| a.0.cmp(&b.0))
        .collect();
    assert_eq!(sorted, vec![(1, "b"), (1, "d"), (2, "a"), (2, "c")]);
}

#[test]
fn select_chains_compose_like_function_composition() {
    let f = |n: i32| n + 3;
    let g = |n: i32| n * 2;

    let chained: Vec<i32> = Sequence::from_source(0..5).select(f).select(g).collect();
    let composed: Vec<i32> = Sequence::from_source(0..5).select(move |n| g(f(n))).collect();
    assert_eq!(chained, composed);
}

#[test]
fn select_runs_once_per_consumed_element_and_not_before() {
    let calls = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&calls);

    let chain = Sequence::from_source(0..100).select(move |n| {
        counter.set(counter.get() + 1);
        n * 10
    });
    // Building the chain evaluates nothing.
    assert_eq!(calls.get(), 0);

    let front: Vec<i32> = chain.take(2).collect();
    assert_eq!(front, vec![0, 10]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn take_terminates_an_unbounded_source() {
    let front: Vec<u64> = Sequence::from_source(0u64..).take(3).collect();
    assert_eq!(front, vec![0, 1, 2]);
}

#[test]
fn where_does_not_scan_past_the_first_demanded_hit() {
    let probes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&probes);

    let hit = Sequence::from_source(1u64..)
        .where_(move |n| {
            counter.set(counter.get() + 1);
            n % 7 == 0
        })
        .first()
        .unwrap();
    assert_eq!(hit, 7);
    assert_eq!(probes.get(), 7);
}

#[test]
fn first_on_an_empty_sequence_is_no_matching_element() {
    let result = Sequence::from_values(Vec::<i32>::new()).first();
    assert!(matches!(result, Err(Error::NoMatchingElement)));
}

#[test]
fn first_by_without_a_hit_is_no_matching_element() {
    let result = Sequence::from_source(0..10).first_by(|n| *n > 99);
    assert!(matches!(result, Err(Error::NoMatchingElement)));
}

#[test]
fn first_or_default_returns_the_default_unchanged_when_empty() {
    let value = Sequence::from_values(Vec::<i32>::new()).first_or_default(-1);
    assert_eq!(value, -1);
}

#[test]
fn first_or_default_by_prefers_a_real_match_over_the_default() {
    // The default also occurs in the data; only "no match" may produce it.
    let value = Sequence::from_values(vec![5, 3, 8]).first_or_default_by(|n| *n > 4, 5);
    assert_eq!(value, 5);

    let fallback = Sequence::from_values(vec![5, 3, 8]).first_or_default_by(|n| *n > 9, 5);
    assert_eq!(fallback, 5);
}

#[test]
fn skip_two_take_one_first_picks_the_third_element() {
    let third = Sequence::from_values(vec![10, 20, 30, 40, 50])
        .skip(2)
        .take(1)
        .first()
        .unwrap();
    assert_eq!(third, 30);
}

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    title: &'static str,
    price: f64,
    category: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Sale {
    id: u32,
    title: &'static str,
    price: f64,
}

#[test]
fn filter_project_sort_window_yields_one_deterministic_record() {
    let catalog = vec![
        Item {
            id: 1,
            title: "Dune",
            price: 10.0,
            category: "book",
        },
        Item {
            id: 2,
            title: "Mouse",
            price: 40.0,
            category: "gadget",
        },
        Item {
            id: 3,
            title: "Hobbit",
            price: 25.0,
            category: "book",
        },
        Item {
            id: 4,
            title: "Lamp",
            price: 15.0,
            category: "gadget",
        },
        Item {
            id: 5,
            title: "Emma",
            price: 30.0,
            category: "book",
        },
        Item {
            id: 6,
            title: "Ulysses",
            price: 12.0,
            category: "book",
        },
    ];

    // 20% off every book, cheapest first, third cheapest wins.
    let pick = Sequence::from_values(catalog)
        .where_(|item| item.category == "book")
        .select(|item| Sale {
            id: item.id,
            title: item.title,
            price: item.price * 4.0 / 5.0,
        })
        .order_by(|a, b| a.price.total_cmp(&b.price))
        .skip(2)
        .take(1)
        .first()
        .unwrap();

    assert_eq!(
        pick,
        Sale {
            id: 3,
            title: "Hobbit",
            price: 20.0,
        }
    );
}
