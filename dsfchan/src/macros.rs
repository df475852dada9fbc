// Shorthand for return Err(DsfError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)                  -> return Err(DsfError::new(ErrorKind::Variant))
// - err!(Variant(a, b))            -> return Err(DsfError::new(ErrorKind::Variant(a, b)))
// - err!(Variant { field, other }) -> return Err(DsfError::new(ErrorKind::Variant { field, other }))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::DsfError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($($arg:expr),+ $(,)?)) => {
		return Err(crate::error::DsfError::new(
			crate::error::ErrorKind::$variant($($arg),+),
		))
	};
	($variant:ident { $($fields:tt)* }) => {
		return Err(crate::error::DsfError::new(
			crate::error::ErrorKind::$variant { $($fields)* },
		))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, any mode without a handler falls through to an empty block.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		BESTATTEMPT: some_expr,
// 		RELAXED: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr $(,)?)?
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => {}
		}
	};
}

pub(crate) use {err, parse_mode_choice};
