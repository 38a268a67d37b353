//! End-to-end: parse an encounter log fragment, attribute, bin.

use apex_timeline::{Combatant, DamageEvent, Job, Span, attribute_events, per_second_totals};

const PARTY_JSON: &str = r#"[
    { "id": 1, "name": "Aki Steel", "job": "SAM", "pets": [] },
    { "id": 2, "name": "Bel Verne", "job": "SMN",
      "pets": [ { "id": 30, "name": "Demi-Phoenix" } ] },
    { "id": 3, "name": "Cori Lune", "job": "AST" }
]"#;

const EVENTS_JSON: &str = r#"[
    { "timestamp": 500,  "source_id": 1,  "amount": 1000.0 },
    { "timestamp": 700,  "source_id": 30, "amount": 300.0 },
    { "timestamp": 1500, "source_id": 2,  "amount": 450.0 },
    { "timestamp": 2100, "source_id": 1,  "amount": 2000.0 },
    { "timestamp": 2200, "source_id": 77, "amount": 50000.0 },
    { "timestamp": 2900, "source_id": 3,  "amount": 120.0 }
]"#;

#[test]
fn parse_attribute_and_bin() {
    let party: Vec<Combatant> = serde_json::from_str(PARTY_JSON).unwrap();
    let events: Vec<DamageEvent> = serde_json::from_str(EVENTS_JSON).unwrap();
    assert_eq!(party[1].job, Job::Smn);

    let buckets = attribute_events(&events, &party);
    assert_eq!(buckets.len(), 3);

    // Pet damage lands on the summoner; id 77 belongs to nobody.
    assert_eq!(buckets[0].len(), 2);
    assert_eq!(buckets[1].len(), 2);
    assert_eq!(buckets[2].len(), 1);

    let span = Span::new(0, 3000).unwrap();
    let samples: Vec<Vec<f64>> = buckets
        .iter()
        .map(|b| per_second_totals(b, span).unwrap())
        .collect();

    assert_eq!(samples[0], vec![1000.0, 0.0, 2000.0]);
    assert_eq!(samples[1], vec![300.0, 450.0, 0.0]);
    assert_eq!(samples[2], vec![0.0, 0.0, 120.0]);
}

#[test]
fn binning_respects_segment_span() {
    let events: Vec<DamageEvent> = serde_json::from_str(EVENTS_JSON).unwrap();

    // A segment starting mid-encounter shifts the bucket origin.
    let span = Span::new(2000, 3000).unwrap();
    let totals = per_second_totals(&events, span).unwrap();
    assert_eq!(totals, vec![2000.0 + 50000.0 + 120.0]);
}
