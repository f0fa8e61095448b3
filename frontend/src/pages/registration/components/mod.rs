pub mod identity_fields;
pub mod notices;
pub mod otp_section;
