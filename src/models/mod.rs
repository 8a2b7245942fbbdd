mod item;
mod sheet;

pub use item::{BulletList, FactCard, Field, Item, Part, ProfileCard, QaCard};
pub use sheet::{Section, Sheet, Subsection, Table, DEFAULT_USAGE_LABEL, GOTCHA_LABEL};
