mod common;
mod routing;
mod scorecard;
mod service;
