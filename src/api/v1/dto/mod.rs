pub mod accounts;
pub mod principals;
