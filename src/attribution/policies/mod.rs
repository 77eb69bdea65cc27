mod copyright_policy;

pub use copyright_policy::CopyrightPolicy;
