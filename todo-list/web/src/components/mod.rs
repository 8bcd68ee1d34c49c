mod add_task_form;
mod error_message;
mod loading_spinner;
mod task_item;
mod task_list;

pub use add_task_form::AddTaskForm;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use task_item::TaskItem;
pub use task_list::TaskList;
