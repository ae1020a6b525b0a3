use super::config::GameConfig;
use super::constants::{ARENA_DECK_SIZE, ARENA_HERO_SLOT, DECK_SIZE};
use super::error::GameError;
use crate::character::factory::{create_card, create_hero};
use crate::character::types::{OwnedCard, OwnedHero};
use crate::items::types::{ConsumableItem, Currency};
use crate::mailbox::MailEntry;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Something placed in an arena deck slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaSlot {
    Hero(String),
    Card(String),
}

impl ArenaSlot {
    pub fn uid(&self) -> &str {
        match self {
            ArenaSlot::Hero(uid) | ArenaSlot::Card(uid) => uid,
        }
    }
}

/// Which of the two arena lineups is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaDeckKind {
    Attack,
    Defense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaState {
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub tickets: u32,
    pub ticket_cap: u32,
    /// Index `ARENA_HERO_SLOT` is owned by the active hero; see `arena_deck`.
    pub attack_deck: [Option<ArenaSlot>; ARENA_DECK_SIZE],
    pub defense_deck: [Option<ArenaSlot>; ARENA_DECK_SIZE],
}

impl ArenaState {
    pub fn new(ticket_cap: u32) -> Self {
        Self {
            points: 0,
            wins: 0,
            losses: 0,
            tickets: ticket_cap,
            ticket_cap,
            attack_deck: Default::default(),
            defense_deck: Default::default(),
        }
    }

    pub fn deck(&self, kind: ArenaDeckKind) -> &[Option<ArenaSlot>; ARENA_DECK_SIZE] {
        match kind {
            ArenaDeckKind::Attack => &self.attack_deck,
            ArenaDeckKind::Defense => &self.defense_deck,
        }
    }

    pub fn deck_mut(&mut self, kind: ArenaDeckKind) -> &mut [Option<ArenaSlot>; ARENA_DECK_SIZE] {
        match kind {
            ArenaDeckKind::Attack => &mut self.attack_deck,
            ArenaDeckKind::Defense => &mut self.defense_deck,
        }
    }
}

/// Everything the player owns. Commands receive it as `&mut PlayerState`;
/// there is no global instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: String,
    pub gold: u64,
    pub gems: u64,
    pub stamina: u32,
    pub stamina_cap: u32,
    /// Unix time stamina regeneration was last applied
    pub last_stamina_tick: i64,
    pub cards: Vec<OwnedCard>,
    pub heroes: Vec<OwnedHero>,
    pub active_hero: Option<String>,
    /// Unequipped card gear, by equipment id
    #[serde(default)]
    pub card_equipment: Vec<String>,
    /// Unequipped hero gear, by equipment id
    #[serde(default)]
    pub hero_equipment: Vec<String>,
    #[serde(default)]
    pub items: BTreeMap<ConsumableItem, u32>,
    pub deck: [Option<String>; DECK_SIZE],
    pub arena: ArenaState,
    /// Best star result per cleared stage id
    #[serde(default)]
    pub stage_stars: BTreeMap<String, u8>,
    #[serde(default)]
    pub mailbox: Vec<MailEntry>,
    pub last_save_time: i64,
}

impl PlayerState {
    /// Creates a new account with the configured starter hero and cards.
    pub fn new<R: Rng>(config: &GameConfig, current_time: i64, rng: &mut R) -> Self {
        use uuid::Uuid;

        let hero = create_hero(&config.starter_hero);
        let cards: Vec<OwnedCard> = config
            .starter_cards
            .iter()
            .map(|id| create_card(Some(id), rng))
            .collect();

        let mut deck: [Option<String>; DECK_SIZE] = Default::default();
        for (slot, card) in deck.iter_mut().zip(cards.iter()) {
            *slot = Some(card.uid.clone());
        }

        let mut arena = ArenaState::new(config.arena_ticket_cap);
        arena.attack_deck[ARENA_HERO_SLOT] = Some(ArenaSlot::Hero(hero.uid.clone()));
        arena.defense_deck[ARENA_HERO_SLOT] = Some(ArenaSlot::Hero(hero.uid.clone()));

        Self {
            player_id: Uuid::new_v4().to_string(),
            gold: config.starting_gold,
            gems: config.starting_gems,
            stamina: config.starting_stamina,
            stamina_cap: config.stamina_cap,
            last_stamina_tick: current_time,
            cards,
            active_hero: Some(hero.uid.clone()),
            heroes: vec![hero],
            card_equipment: Vec::new(),
            hero_equipment: Vec::new(),
            items: BTreeMap::new(),
            deck,
            arena,
            stage_stars: BTreeMap::new(),
            mailbox: Vec::new(),
            last_save_time: current_time,
        }
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Gold => self.gold,
            Currency::Gems => self.gems,
        }
    }

    /// Fails without spending when the balance is short.
    pub fn ensure_affordable(&self, currency: Currency, amount: u64) -> Result<(), GameError> {
        let have = self.balance(currency);
        if have < amount {
            return Err(GameError::NotEnoughCurrency {
                currency,
                have,
                need: amount,
            });
        }
        Ok(())
    }

    pub fn spend(&mut self, currency: Currency, amount: u64) -> Result<(), GameError> {
        self.ensure_affordable(currency, amount)?;
        match currency {
            Currency::Gold => self.gold -= amount,
            Currency::Gems => self.gems -= amount,
        }
        Ok(())
    }

    pub fn earn(&mut self, currency: Currency, amount: u64) {
        match currency {
            Currency::Gold => self.gold = self.gold.saturating_add(amount),
            Currency::Gems => self.gems = self.gems.saturating_add(amount),
        }
    }

    pub fn card(&self, uid: &str) -> Option<&OwnedCard> {
        self.cards.iter().find(|c| c.uid == uid)
    }

    pub fn card_mut(&mut self, uid: &str) -> Option<&mut OwnedCard> {
        self.cards.iter_mut().find(|c| c.uid == uid)
    }

    pub fn hero(&self, uid: &str) -> Option<&OwnedHero> {
        self.heroes.iter().find(|h| h.uid == uid)
    }

    pub fn hero_mut(&mut self, uid: &str) -> Option<&mut OwnedHero> {
        self.heroes.iter_mut().find(|h| h.uid == uid)
    }

    pub fn active_hero(&self) -> Option<&OwnedHero> {
        self.active_hero.as_deref().and_then(|uid| self.hero(uid))
    }

    pub fn owns_hero_template(&self, template_id: &str) -> bool {
        self.heroes.iter().any(|h| h.template_id == template_id)
    }

    pub fn item_count(&self, item: ConsumableItem) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn add_item(&mut self, item: ConsumableItem, quantity: u32) {
        *self.items.entry(item).or_insert(0) += quantity;
    }

    pub fn take_item(&mut self, item: ConsumableItem) -> Result<(), GameError> {
        match self.items.get_mut(&item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.items.remove(&item);
                }
                Ok(())
            }
            _ => Err(GameError::ItemNotOwned(item)),
        }
    }

    /// True when the card sits in the PvE deck or either arena deck.
    pub fn is_card_deployed(&self, uid: &str) -> bool {
        let in_deck = self.deck.iter().flatten().any(|slot| slot == uid);
        let in_arena = self
            .arena
            .attack_deck
            .iter()
            .chain(self.arena.defense_deck.iter())
            .flatten()
            .any(|slot| matches!(slot, ArenaSlot::Card(id) if id == uid));
        in_deck || in_arena
    }

    /// Removes a card from the collection and every deck. Its equipment goes
    /// back to the inventory.
    pub fn remove_card(&mut self, uid: &str) -> Option<OwnedCard> {
        let index = self.cards.iter().position(|c| c.uid == uid)?;
        let mut card = self.cards.remove(index);
        self.card_equipment.extend(card.equipped.take_all());

        for slot in self.deck.iter_mut() {
            if slot.as_deref() == Some(uid) {
                *slot = None;
            }
        }
        for kind in [ArenaDeckKind::Attack, ArenaDeckKind::Defense] {
            for slot in self.arena.deck_mut(kind).iter_mut() {
                if matches!(slot, Some(ArenaSlot::Card(id)) if id == uid) {
                    *slot = None;
                }
            }
        }
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_state() -> PlayerState {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        PlayerState::new(&GameConfig::default(), 0, &mut rng)
    }

    #[test]
    fn test_new_state_defaults() {
        let state = new_state();
        assert_eq!(state.gold, 1000);
        assert_eq!(state.gems, 300);
        assert_eq!(state.heroes.len(), 1);
        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.deck.len(), DECK_SIZE);
        assert_eq!(state.deck.iter().flatten().count(), 3);
        assert_eq!(state.arena.tickets, 5);
        assert_eq!(state.active_hero().unwrap().template_id, "hero_knight");
    }

    #[test]
    fn test_spend_and_earn() {
        let mut state = new_state();
        state.spend(Currency::Gold, 400).unwrap();
        assert_eq!(state.gold, 600);
        state.earn(Currency::Gems, 50);
        assert_eq!(state.gems, 350);
    }

    #[test]
    fn test_spend_insufficient_leaves_balance() {
        let mut state = new_state();
        let err = state.spend(Currency::Gems, 301).unwrap_err();
        assert!(matches!(
            err,
            GameError::NotEnoughCurrency {
                have: 300,
                need: 301,
                ..
            }
        ));
        assert_eq!(state.gems, 300);
    }

    #[test]
    fn test_items_add_take() {
        let mut state = new_state();
        assert_eq!(state.item_count(ConsumableItem::ExpBook), 0);
        assert!(state.take_item(ConsumableItem::ExpBook).is_err());
        state.add_item(ConsumableItem::ExpBook, 2);
        state.take_item(ConsumableItem::ExpBook).unwrap();
        assert_eq!(state.item_count(ConsumableItem::ExpBook), 1);
    }

    #[test]
    fn test_remove_card_clears_decks_and_returns_gear() {
        let mut state = new_state();
        let uid = state.cards[0].uid.clone();
        state.cards[0].equipped.weapon = Some("eq_wood_sword".into());
        state.arena.attack_deck[1] = Some(ArenaSlot::Card(uid.clone()));
        assert!(state.is_card_deployed(&uid));

        let removed = state.remove_card(&uid).unwrap();
        assert_eq!(removed.uid, uid);
        assert!(!state.is_card_deployed(&uid));
        assert_eq!(state.card_equipment, vec!["eq_wood_sword".to_string()]);
        assert!(state.remove_card(&uid).is_none());
    }

    #[test]
    fn test_state_json_roundtrip() {
        let mut state = new_state();
        state.add_item(ConsumableItem::GrowthStone, 1);
        let json = serde_json::to_string(&state).unwrap();
        let loaded: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, state);
    }
}
