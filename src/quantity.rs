/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Distance,
    Temperature,
    Energy,
    Consumption,
}

impl QuantityKind {
    /// CLI 인자 문자열에서 물리량을 찾는다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "distance" | "length" => Some(QuantityKind::Distance),
            "temperature" | "temp" => Some(QuantityKind::Temperature),
            "energy" => Some(QuantityKind::Energy),
            "consumption" => Some(QuantityKind::Consumption),
            _ => None,
        }
    }
}
