use serde::Serialize;

/// Размеры страницы, доступные в селекторе
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [20, 40, 100];

/// Размер страницы по умолчанию
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Трейт для дескриптора фильтров списка
///
/// Дескриптор целиком уходит телом запроса `<collection>/show`,
/// поэтому порядок полей структуры = порядок ключей в JSON.
pub trait PagedFilter: Clone + PartialEq + Default + Serialize + std::fmt::Debug + 'static {
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn per_page(&self) -> u32;
    fn set_per_page(&mut self, per_page: u32);
}

/// Статус обработки записи (поле `pending`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingState {
    /// Только для фильтра: без ограничения
    Any,
    Normal,
    NeedsReview,
    /// Для офферов "не выставлен", для товаров "к снятию"
    Withdrawn,
}

impl PendingState {
    pub fn code(self) -> i32 {
        match self {
            PendingState::Any => 999,
            PendingState::Normal => 0,
            PendingState::NeedsReview => -1,
            PendingState::Withdrawn => -2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            999 => Some(PendingState::Any),
            0 => Some(PendingState::Normal),
            -1 => Some(PendingState::NeedsReview),
            -2 => Some(PendingState::Withdrawn),
            _ => None,
        }
    }

    /// Значения, которые можно выставить записи (без `Any`)
    pub fn record_states() -> [PendingState; 3] {
        [
            PendingState::Normal,
            PendingState::NeedsReview,
            PendingState::Withdrawn,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_codes_roundtrip() {
        for state in [
            PendingState::Any,
            PendingState::Normal,
            PendingState::NeedsReview,
            PendingState::Withdrawn,
        ] {
            assert_eq!(PendingState::from_code(state.code()), Some(state));
        }
        assert_eq!(PendingState::from_code(5), None);
    }

    #[test]
    fn test_record_states_exclude_any() {
        assert!(!PendingState::record_states().contains(&PendingState::Any));
    }
}
