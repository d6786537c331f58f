//! End-to-end craft and restock scenarios for the market engine.
//!
//! Each test drives a picker, the transaction emitter, and a recording sink
//! the way the shop UI does, then asserts on the emitted intents and
//! notifications only.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use cropcraft_market::{
    Catalog, CraftOutcome, CropcraftConfig, GameStateSource, LiveState, MarketConfig, Picker, PickerSignal,
    RecordingSink, StateUpdate, TransactionEmitter, affordability, stock,
};
use cropcraft_types::{
    Availability, CraftableItem, DisplayMode, GameSnapshot, Ineligibility, Intent, ItemName,
};
use rust_decimal::Decimal;

const CATALOG: &str = r#"
items:
  - name: Sunflower Statue
    price: "10"
    ingredients:
      - item: Wood
        amount: "2"
  - name: Gold Egg
    price: "1"
    supply: 0
  - name: Christmas Tree
    price: "1"
    disabled: true
  - name: Wood Nymph
    price: "0.3"
    ingredients:
      - item: Wood
        amount: "0.1"
"#;

fn picker(mode: DisplayMode) -> Picker {
    Picker::new(Catalog::parse(CATALOG).unwrap(), mode).unwrap()
}

fn emitter() -> TransactionEmitter {
    TransactionEmitter::new(&MarketConfig::default())
}

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

#[test]
fn affordable_statue_crafts_once() {
    let picker = picker(DisplayMode::Single);
    let state = GameSnapshot::with_balance(Decimal::new(10, 0)).holding("Wood", Decimal::new(2, 0));
    let mut sink = RecordingSink::new();

    let eligibility = emitter().evaluate(picker.selection().current(), 1, &state);
    assert!(eligibility.can_craft());
    assert_eq!(eligibility.stock.remaining_stock, Decimal::new(20, 0));

    let outcome = emitter().craft(picker.selection(), qty(1), &state, &mut sink);

    assert_eq!(
        sink.intents,
        vec![Intent::ItemCrafted {
            item: ItemName::from("Sunflower Statue"),
            amount: 1,
        }]
    );
    let debit = outcome.notifications().first().map(|n| n.content("SFL"));
    assert_eq!(debit.as_deref(), Some("SFL -$10"));
    assert_eq!(outcome.notifications().len(), 2);
    assert_eq!(sink.shortcut, Some(ItemName::from("Sunflower Statue")));
}

#[test]
fn one_short_of_price_emits_nothing() {
    let picker = picker(DisplayMode::Single);
    let state = GameSnapshot::with_balance(Decimal::new(9, 0)).holding("Wood", Decimal::new(2, 0));
    let mut sink = RecordingSink::new();

    let eligibility = emitter().evaluate(picker.selection().current(), 1, &state);
    assert!(eligibility.affordability.insufficient_funds);

    let outcome = emitter().craft(picker.selection(), qty(1), &state, &mut sink);
    assert!(matches!(outcome, CraftOutcome::Blocked { .. }));
    assert!(sink.intents.is_empty());
    assert!(outcome.notifications().is_empty());
}

#[test]
fn short_ingredient_is_named_and_blocks() {
    let picker = picker(DisplayMode::Bulk);
    let state = GameSnapshot::with_balance(Decimal::new(1000, 0)).holding("Wood", Decimal::new(5, 0));
    let mut sink = RecordingSink::new();

    let outcome = emitter().craft(picker.selection(), qty(3), &state, &mut sink);

    assert_eq!(
        outcome.reasons(),
        &[Ineligibility::InsufficientIngredient {
            item: ItemName::from("Wood"),
            required: Some(Decimal::new(6, 0)),
            held: Decimal::new(5, 0),
        }]
    );
    assert!(sink.intents.is_empty());
}

#[test]
fn zero_supply_is_permanently_sold_out() {
    let mut picker = picker(DisplayMode::Single);
    picker.selection_mut().select("Gold Egg").unwrap();
    let state = GameSnapshot::with_balance(Decimal::new(100, 0)).stocked("Gold Egg", Decimal::new(20, 0));
    let mut sink = RecordingSink::new();

    let eligibility = emitter().evaluate(picker.selection().current(), 1, &state);
    assert!(eligibility.stock.sold_out_globally);
    assert_eq!(eligibility.availability(), Availability::SoldOutGlobally);
    assert!(!eligibility.can_restock());

    let outcome = emitter().craft(picker.selection(), qty(1), &state, &mut sink);
    assert_eq!(outcome.reasons(), &[Ineligibility::SoldOutGlobally]);
    assert!(sink.intents.is_empty());
}

#[test]
fn locked_item_cannot_craft_or_restock() {
    let mut picker = picker(DisplayMode::Single);
    picker.selection_mut().select("Christmas Tree").unwrap();
    let state = GameSnapshot::with_balance(Decimal::new(100, 0)).stocked("Christmas Tree", Decimal::ZERO);
    let mut sink = RecordingSink::new();

    let eligibility = emitter().evaluate(picker.selection().current(), 1, &state);
    assert_eq!(eligibility.availability(), Availability::Locked);
    assert!(!eligibility.can_restock());
    assert!(!emitter().craft(picker.selection(), qty(1), &state, &mut sink).is_crafted());
    assert!(sink.intents.is_empty());
}

#[test]
fn local_sell_out_restocks_regardless_of_funds() {
    let mut picker = picker(DisplayMode::Single);
    let mut live = LiveState::new(
        GameSnapshot::with_balance(Decimal::ZERO).stocked("Sunflower Statue", Decimal::ZERO),
    );
    assert!(picker.open(&live));

    let eligibility = emitter().evaluate(picker.selection().current(), 1, &live.snapshot());
    assert!(eligibility.stock.sold_out_locally);
    assert!(eligibility.affordability.insufficient_funds);
    assert!(eligibility.can_restock());

    let mut sink = RecordingSink::new();
    let signal = emitter().restock(&mut sink);
    picker.handle(signal);

    assert_eq!(signal, PickerSignal::Close);
    assert_eq!(sink.intents, vec![Intent::Sync]);
    assert!(!picker.is_open());

    // The service answers the resync by pushing fresh stock.
    live.apply(StateUpdate::Stock(BTreeMap::from([(
        ItemName::from("Sunflower Statue"),
        Decimal::new(20, 0),
    )])));
    let refreshed = emitter().evaluate(picker.selection().current(), 1, &live.snapshot());
    assert!(!refreshed.stock.sold_out_locally);
}

#[test]
fn fractional_boundary_is_not_a_false_shortfall() {
    let mut picker = picker(DisplayMode::Bulk);
    picker.selection_mut().select("Wood Nymph").unwrap();
    let state = GameSnapshot::with_balance(Decimal::new(9, 1)).holding("Wood", Decimal::new(3, 1));
    let mut sink = RecordingSink::new();

    let outcome = emitter().craft(picker.selection(), qty(3), &state, &mut sink);

    assert!(outcome.is_crafted(), "blocked by {:?}", outcome.reasons());
    let contents: Vec<String> = outcome.notifications().iter().map(|n| n.content("SFL")).collect();
    assert_eq!(contents, vec!["SFL -$0.9", "Item Wood -0.3"]);
}

#[test]
fn stock_cannot_go_negative() {
    let picker = picker(DisplayMode::Bulk);
    let state = GameSnapshot::with_balance(Decimal::new(1000, 0))
        .holding("Wood", Decimal::new(100, 0))
        .stocked("Sunflower Statue", Decimal::new(3, 0));
    let mut sink = RecordingSink::new();

    let outcome = emitter().craft(picker.selection(), qty(10), &state, &mut sink);
    assert_eq!(
        outcome.reasons(),
        &[Ineligibility::InsufficientStock {
            remaining: Decimal::new(3, 0),
            requested: 10,
        }]
    );
    assert!(sink.intents.is_empty());

    assert!(emitter().craft(picker.selection(), qty(3), &state, &mut sink).is_crafted());
}

#[test]
fn evaluators_are_idempotent() {
    let item = CraftableItem::new("Axe", Decimal::new(3, 0)).with_ingredient("Wood", Decimal::new(1, 1));
    let state = GameSnapshot::with_balance(Decimal::new(5, 0))
        .holding("Wood", Decimal::new(2, 1))
        .stocked("Axe", Decimal::new(4, 0));
    let before = state.clone();

    let a1 = affordability::evaluate(&item, 2, state.balance, &state.inventory);
    let a2 = affordability::evaluate(&item, 2, state.balance, &state.inventory);
    let s1 = stock::evaluate(&item, &state.stock, stock::DEFAULT_STOCK_CEILING);
    let s2 = stock::evaluate(&item, &state.stock, stock::DEFAULT_STOCK_CEILING);

    assert_eq!(a1, a2);
    assert_eq!(s1, s2);
    assert_eq!(state, before);
}

#[test]
fn quantity_monotonicity_holds_across_bulk_offers() {
    let picker = picker(DisplayMode::Bulk);
    let state = GameSnapshot::with_balance(Decimal::new(50, 0)).holding("Wood", Decimal::new(30, 0));
    let config = MarketConfig {
        bulk_quantities: vec![1, 2, 5, 6, 10, 20],
        ..MarketConfig::default()
    };

    let affordable: Vec<bool> = picker
        .offered_quantities(&config)
        .iter()
        .map(|q| {
            emitter()
                .evaluate(picker.selection().current(), q.get(), &state)
                .affordability
                .is_affordable()
        })
        .collect();

    assert_eq!(affordable, vec![true, true, true, false, false, false]);
}

#[test]
fn configured_market_changes_ceiling_and_label() {
    let config = CropcraftConfig::parse(
        "market:\n  default_stock_ceiling: \"0\"\n  currency_label: \"GOLD\"\n",
    )
    .unwrap();
    let emitter = TransactionEmitter::new(&config.market);
    let picker = picker(DisplayMode::Single);
    let state = GameSnapshot::with_balance(Decimal::new(10, 0)).holding("Wood", Decimal::new(2, 0));

    let eligibility = emitter.evaluate(picker.selection().current(), 1, &state);
    assert!(eligibility.can_restock());
    assert_eq!(emitter.currency_label(), "GOLD");
}
