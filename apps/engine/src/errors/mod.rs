pub mod domain;

#[cfg(test)]
mod tests_errors;
