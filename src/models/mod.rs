// Module exports for models

pub mod settings;
pub mod view_mode;
pub mod work_center;
pub mod work_order;
