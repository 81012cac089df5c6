#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Street {
    Pref = 0,
    Flop = 1,
    Turn = 2,
    Rive = 3,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => panic!("terminal"),
        }
    }
    /// community cards on the table once this street is dealt
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// community cards dealt to reach the next street
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Pref => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::Rive => panic!("terminal"),
        }
    }
}

/// from number of observed community cards
impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::Rive,
            _ => panic!("no street has {} community cards", n),
        }
    }
}

/// fallible for boards of arbitrary size. the core accepts any board of
/// five or fewer cards, but only 0, 3, 4, 5 name a street; boundary
/// surfaces check here before asking a spot what street it is on.
impl TryFrom<&super::board::Board> for Street {
    type Error = super::error::DealError;
    fn try_from(board: &super::board::Board) -> Result<Self, Self::Error> {
        match board.size() {
            n @ (0 | 3 | 4 | 5) => Ok(Self::from(n)),
            n => Err(super::error::DealError::Street(n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        match rand::random_range(0..4) {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            _ => Self::Rive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk() {
        assert_eq!(Street::Pref.next(), Street::Flop);
        assert_eq!(Street::Flop.next(), Street::Turn);
        assert_eq!(Street::Turn.next(), Street::Rive);
    }

    #[test]
    fn only_street_sized_boards_convert() {
        use super::super::board::Board;
        use super::super::error::DealError;
        let board = Board::try_from("2S 3D").unwrap();
        assert_eq!(Street::try_from(&board), Err(DealError::Street(2)));
        let board = Board::try_from("2S 3D 4C").unwrap();
        assert_eq!(Street::try_from(&board), Ok(Street::Flop));
        assert_eq!(Street::try_from(&Board::new()), Ok(Street::Pref));
    }

    #[test]
    fn observed_plus_revealed() {
        for street in Street::all().iter().take(3) {
            assert_eq!(
                street.n_observed() + street.n_revealed(),
                street.next().n_observed()
            );
        }
    }
}
