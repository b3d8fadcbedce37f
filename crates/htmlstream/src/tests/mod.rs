mod legacy_sequence;
mod property_partition;
