pub mod application;
pub mod call;
pub mod fields;
pub mod job;
pub mod property;
pub mod property_type;
pub mod registration;
pub mod user;

pub use application::Application;
pub use call::{Call, CallDirection};
pub use fields::{MaybeExpanded, TextValue};
pub use job::{Job, JobType};
pub use property::{Property, PropertyStatus};
pub use property_type::{Category, PropertyType};
pub use registration::{ProfileType, Registration};
pub use user::User;
