#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardId {
    A,
    B,
    C,
    D,
}

impl CardId {
    pub fn key(&self) -> &'static str {
        match self {
            CardId::A => "a",
            CardId::B => "b",
            CardId::C => "c",
            CardId::D => "d",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            CardId::A => "card-a",
            CardId::B => "card-b",
            CardId::C => "card-c",
            CardId::D => "card-d",
        }
    }
}

/// Back-to-front order of the hero card stack. The last card is on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardOrder([CardId; 4]);

impl Default for CardOrder {
    fn default() -> Self {
        Self([CardId::A, CardId::B, CardId::C, CardId::D])
    }
}

impl CardOrder {
    pub fn as_slice(&self) -> &[CardId] {
        &self.0
    }

    pub fn front(&self) -> CardId {
        self.0[self.0.len() - 1]
    }

    pub fn is_front(&self, index: usize) -> bool {
        index + 1 == self.0.len()
    }

    /// Moves the top card to the bottom of the stack.
    pub fn send_front_to_back(self) -> Self {
        let mut cards = self.0;
        cards.rotate_right(1);
        Self(cards)
    }
}

/// Inline style for the card at `index`. Only the front card takes pointer input.
pub fn card_style(index: usize, is_front: bool) -> String {
    let (pointer_events, cursor) = if is_front {
        ("auto", "pointer")
    } else {
        ("none", "default")
    };
    format!(
        "z-index: {}; pointer-events: {}; cursor: {};",
        index + 10,
        pointer_events,
        cursor
    )
}
