mod items;
mod submit;

pub use items::ItemsPage;
pub use submit::SubmitPage;
