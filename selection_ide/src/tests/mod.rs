#[cfg(test)]
mod test_completion_context;
#[cfg(test)]
mod test_session;
