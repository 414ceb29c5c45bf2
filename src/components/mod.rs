mod auction_items;
mod chat_window;
mod submission_form;

pub use auction_items::AuctionItems;
pub use chat_window::ChatWindow;
pub use submission_form::ItemSubmissionForm;
