
mod property_roundtrip;
