/// Number of comparisons a `ComparisonCache` keeps before evicting the oldest.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;
