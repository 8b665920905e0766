use serde::Serialize;

pub const CARD_GAP_PX: u32 = 16;
/// Fewer rows than this keep their natural width
pub const MIN_ROWS_FOR_LAYOUT: usize = 3;

/// Viewport classes: xs < 600 <= sm < 900 <= md < 1200 <= lg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    pub fn from_width(width: u32) -> Self {
        match width {
            0..600 => Breakpoint::Xs,
            600..900 => Breakpoint::Sm,
            900..1200 => Breakpoint::Md,
            _ => Breakpoint::Lg,
        }
    }

    pub fn columns(&self) -> u32 {
        match self {
            Breakpoint::Xs => 1,
            Breakpoint::Sm => 2,
            Breakpoint::Md => 3,
            Breakpoint::Lg => 4,
        }
    }

    /// Phones get the card view regardless of preferences.
    pub fn is_mobile(&self) -> bool {
        *self == Breakpoint::Xs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLayout {
    pub breakpoint: Breakpoint,
    pub columns: u32,
    pub card_width: u32,
    pub gap: u32,
}

/// Card width for `container_width`, or `None` when there are too few rows
/// to lay out. Columns are dropped until cards reach `min_card_width`.
pub fn compute_card_layout(
    container_width: u32,
    row_count: usize,
    min_card_width: u32,
) -> Option<CardLayout> {
    if row_count < MIN_ROWS_FOR_LAYOUT {
        return None;
    }

    let breakpoint = Breakpoint::from_width(container_width);
    let mut columns = breakpoint.columns();
    let width_for = |columns: u32| {
        container_width.saturating_sub(CARD_GAP_PX * (columns - 1)) / columns
    };

    while columns > 1 && width_for(columns) < min_card_width {
        columns -= 1;
    }

    Some(CardLayout {
        breakpoint,
        columns,
        card_width: width_for(columns).max(min_card_width),
        gap: CARD_GAP_PX,
    })
}
