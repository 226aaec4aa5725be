// The built-in exercise set: toy geometry scaffolds for teaching struct
// construction, method definition, and delegation.

pub mod point;
pub mod rect;
pub mod square;

use crate::core::runner::SuiteEntry;

pub fn builtin_suite() -> Vec<SuiteEntry> {
    vec![
        SuiteEntry {
            exercise: rect::exercise(),
            scaffold: Box::new(rect::RectScaffold),
        },
        SuiteEntry {
            exercise: square::exercise(),
            scaffold: Box::new(square::SquareScaffold),
        },
        SuiteEntry {
            exercise: point::exercise(),
            scaffold: Box::new(point::PointScaffold),
        },
    ]
}

pub fn exercise_ids() -> Vec<&'static str> {
    vec![rect::ID, square::ID, point::ID]
}
