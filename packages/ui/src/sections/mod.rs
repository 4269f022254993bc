//! Public renderers for each section kind.

mod layout;
pub use layout::SectionLayout;

mod book;
pub use book::BookSection;

mod writing;
pub use writing::WritingSection;

mod creativity;
pub use creativity::CreativitySection;

mod reading;
pub use reading::ReadingSection;

mod links;
pub use links::LinksSection;
