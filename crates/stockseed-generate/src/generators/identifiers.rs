use rand::Rng;

/// `SN-` followed by the first eight hex digits of a random v4 UUID, upper-cased.
pub fn serial_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.random();
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    let simple = uuid.simple().to_string();
    format!("SN-{}", simple[..8].to_ascii_uppercase())
}

/// `<model>-NNNN` with a four-digit suffix.
pub fn model_number<R: Rng + ?Sized>(model: &str, rng: &mut R) -> String {
    let suffix: u16 = rng.random_range(1000..=9999);
    format!("{model}-{suffix}")
}
