/*!
 * Collection Passes
 * Flush/measure hook run around each measurement
 */

pub mod collector;

pub use collector::FlushCollector;
