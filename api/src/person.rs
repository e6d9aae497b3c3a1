// structs and types

// recognized faces get their own thumbnail namespace on the server, so the
// uuid is kept distinct from AssetUuid even though both are string ids
pub type PersonUuid = String;
