mod fmt;
mod variadic;
