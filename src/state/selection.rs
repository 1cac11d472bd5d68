// Selection / transform state of the single image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected,
    /// A drag, resize or rotate gesture is running on the selected image.
    Transforming,
}

impl Selection {
    pub fn is_selected(self) -> bool {
        !matches!(self, Selection::Idle)
    }

    pub fn select(self) -> Self {
        match self {
            Selection::Idle => Selection::Selected,
            other => other,
        }
    }

    /// Background click or Escape. Ignored mid-gesture.
    pub fn deselect(self) -> Self {
        match self {
            Selection::Transforming => Selection::Transforming,
            _ => Selection::Idle,
        }
    }

    /// Gestures always act on the selected image, so starting one selects
    /// it: dragging an unselected image leaves it `Selected` on release.
    pub fn begin_transform(self) -> Self {
        Selection::Transforming
    }

    pub fn end_transform(self) -> Self {
        match self {
            Selection::Transforming => Selection::Selected,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_deselect() {
        let s = Selection::default();
        assert!(!s.is_selected());
        let s = s.select();
        assert_eq!(s, Selection::Selected);
        assert_eq!(s.select(), Selection::Selected);
        assert_eq!(s.deselect(), Selection::Idle);
    }

    #[test]
    fn transform_cycle() {
        let s = Selection::Selected.begin_transform();
        assert_eq!(s, Selection::Transforming);
        assert!(s.is_selected());
        assert_eq!(s.deselect(), Selection::Transforming);
        assert_eq!(s.select(), Selection::Transforming);
        assert_eq!(s.end_transform(), Selection::Selected);
        assert_eq!(Selection::Idle.end_transform(), Selection::Idle);
        assert_eq!(Selection::Idle.begin_transform().end_transform(), Selection::Selected);
    }
}
