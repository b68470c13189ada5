mod account_session;
#[cfg(test)]
mod tests;

pub use account_session::AccountSession;
