pub mod applications;
pub mod calls;
pub mod categories;
pub mod contact;
pub mod jobs;
pub mod properties;
pub mod property_types;
pub mod registrations;
