mod add_task_form;
mod live_announcer;
mod progress_meter;
mod site_header;
mod task_edit_form;
mod task_list;
mod task_list_row;

pub use add_task_form::AddTaskForm;
pub use live_announcer::LiveAnnouncer;
pub use progress_meter::ProgressMeter;
pub use site_header::SiteHeader;
pub use task_edit_form::TaskEditForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
