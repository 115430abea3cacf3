use bjtable::{
    Actions, Card, DealerView, HandOutcome, HandResult, HandView, Phase, RoundResult,
    RoundSnapshot, Table, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, decks: u8, starting_balance: u32) -> Result<WasmTable, JsValue> {
        let options = TableOptions::default()
            .with_decks(decks)
            .with_starting_balance(u64::from(starting_balance));
        Table::new(options, u64::from(seed))
            .map(|table| Self { table })
            .map_err(js_err)
    }

    pub fn deal(&self, bet: u32) -> Result<JsValue, JsValue> {
        render(self.table.deal(u64::from(bet)))
    }

    pub fn hit(&self) -> Result<JsValue, JsValue> {
        render(self.table.hit())
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        render(self.table.stand())
    }

    pub fn double_down(&self) -> Result<JsValue, JsValue> {
        render(self.table.double())
    }

    pub fn split(&self) -> Result<JsValue, JsValue> {
        render(self.table.split())
    }

    pub fn dealer_step(&self) -> Result<JsValue, JsValue> {
        render(self.table.dealer_step())
    }

    pub fn start_new_round(&self) -> Result<JsValue, JsValue> {
        render(self.table.start_new_round())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.table.snapshot()))
    }
}

fn render<E: core::fmt::Display>(result: Result<RoundSnapshot, E>) -> Result<JsValue, JsValue> {
    let snapshot = result.map_err(js_err)?;
    to_js_value(&Snapshot::from(snapshot))
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    balance: String,
    balance_cents: f64,
    dealer: JsDealer,
    hands: Vec<JsHand>,
    active_hand: Option<u32>,
    actions: JsActions,
    result: Option<JsRoundResult>,
    cards_remaining: u32,
}

impl From<RoundSnapshot> for Snapshot {
    fn from(snapshot: RoundSnapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.phase),
            balance: snapshot.balance.to_string(),
            balance_cents: snapshot.balance.cents() as f64,
            dealer: JsDealer::from(&snapshot.dealer),
            hands: snapshot.hands.iter().map(JsHand::from).collect(),
            active_hand: snapshot.active_hand.map(|index| index as u32),
            actions: JsActions::from(snapshot.actions),
            result: snapshot.result.map(JsRoundResult::from),
            cards_remaining: snapshot.cards_remaining as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: char,
    red: bool,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    bet: u32,
    doubled: bool,
    finished: bool,
}

impl From<&HandView> for JsHand {
    fn from(hand: &HandView) -> Self {
        Self {
            cards: hand.cards.iter().copied().map(card_to_js).collect(),
            value: hand.value,
            is_soft: hand.is_soft,
            bet: hand.bet as u32,
            doubled: hand.doubled,
            finished: hand.finished,
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
    hole_concealed: bool,
    is_soft: bool,
}

impl From<&DealerView> for JsDealer {
    fn from(dealer: &DealerView) -> Self {
        Self {
            cards: dealer
                .visible_cards()
                .into_iter()
                .map(|card| card.map(card_to_js))
                .collect(),
            visible_value: dealer.visible_value(),
            hole_concealed: dealer.hole_concealed,
            is_soft: dealer.is_soft && !dealer.hole_concealed,
        }
    }
}

#[derive(Serialize)]
struct JsActions {
    hit: bool,
    stand: bool,
    double: bool,
    split: bool,
}

impl From<Actions> for JsActions {
    fn from(actions: Actions) -> Self {
        Self {
            hit: actions.hit,
            stand: actions.stand,
            double: actions.double,
            split: actions.split,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    hands: Vec<JsHandResult>,
    dealer_value: u8,
    dealer_bust: bool,
    dealer_blackjack: bool,
    total_credited: String,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            total_credited: result.total_credited().to_string(),
            hands: result.hands.into_iter().map(JsHandResult::from).collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            dealer_blackjack: result.dealer_blackjack,
        }
    }
}

#[derive(Serialize)]
struct JsHandResult {
    hand_index: u32,
    outcome: &'static str,
    bet: u32,
    credited: String,
    player_value: u8,
    dealer_value: u8,
}

impl From<HandResult> for JsHandResult {
    fn from(result: HandResult) -> Self {
        Self {
            hand_index: result.hand_index as u32,
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            credited: result.credited.to_string(),
            player_value: result.player_value,
            dealer_value: result.dealer_value,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.symbol(),
        suit: card.suit.symbol(),
        red: card.suit.is_red(),
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::PlayerActing => "PlayerActing",
        Phase::DealerActing => "DealerActing",
        Phase::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Lose => "Lose",
        HandOutcome::Push => "Push",
        HandOutcome::Blackjack => "Blackjack",
        HandOutcome::Bust => "Bust",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
