//! Static catalogs for the Brasília (DF) study area.
//!
//! Coordinates were picked from OpenStreetMap. Delivery points are landmarks
//! that receive regular shipments; candidate sites are industrial or
//! commercial sectors zoned for warehousing.

use crate::model::{CandidateSite, DeliveryPoint, GeoPoint};

/// A named landmark used to seed the delivery point list.
#[derive(Debug, Clone, Copy)]
pub struct Landmark {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Landmark {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Map center used by renderers when framing the study area.
pub const STUDY_AREA_CENTER: GeoPoint = GeoPoint::new(-15.7801, -47.9292);

// ============================================================================
// Candidate Warehouse Sites
// ============================================================================

/// Sites eligible to host a warehouse. Strategies refer to them by index.
pub const CANDIDATE_SITES: &[CandidateSite] = &[
    CandidateSite::new("Setor de Indústria e Abastecimento", -15.8146, -47.9495), // 0
    CandidateSite::new("Setor de Indústrias Gráficas", -15.7992, -47.9196), // 1
    CandidateSite::new("Setor de Armazenagem e Abastecimento Norte", -15.7309, -47.9055), // 2
    CandidateSite::new("Setor de Inflamáveis", -15.8519, -47.9621), // 3
    CandidateSite::new("Taguatinga Industrial", -15.8345, -48.0742), // 4
    CandidateSite::new("Setor de Materiais de Construção", -15.8471, -48.0335), // 5
    CandidateSite::new("Polo JK", -16.0321, -47.9832), // 6
    CandidateSite::new("Cidade do Automóvel", -15.8640, -48.0987), // 7
    CandidateSite::new("Setor de Múltiplas Atividades Sul", -15.8411, -47.9410), // 8
    CandidateSite::new("Setor de Clubes Esportivos Sul", -15.8221, -47.8944), // 9
    CandidateSite::new("Sobradinho Industrial", -15.6565, -47.8100), // 10
    CandidateSite::new("Núcleo Bandeirante", -15.8673, -47.9673), // 11
    CandidateSite::new("Área Industrial de Ceilândia", -15.8307, -48.1273), // 12
    CandidateSite::new("Samambaia Sul", -15.8665, -48.0893), // 13
    CandidateSite::new("Recanto das Emas", -15.9138, -48.0668), // 14
    CandidateSite::new("Guará Industrial", -15.8179, -47.9899), // 15
];

// ============================================================================
// Delivery Points
// ============================================================================

pub const DELIVERY_LANDMARKS: &[Landmark] = &[
    // Plano Piloto: Esplanada and central sectors
    Landmark::new("Rodoviária do Plano Piloto", -15.7939, -47.8828),
    Landmark::new("Esplanada dos Ministérios", -15.7980, -47.8660),
    Landmark::new("Congresso Nacional", -15.7997, -47.8644),
    Landmark::new("Palácio do Planalto", -15.7986, -47.8678),
    Landmark::new("Supremo Tribunal Federal", -15.8022, -47.8628),
    Landmark::new("Teatro Nacional", -15.7906, -47.8789),
    Landmark::new("Catedral Metropolitana", -15.7981, -47.8754),
    Landmark::new("Memorial JK", -15.7847, -47.9135),
    Landmark::new("Parque da Cidade", -15.8016, -47.9124),
    Landmark::new("Torre de TV", -15.7905, -47.8932),

    // Asa Norte
    Landmark::new("UnB - Universidade de Brasília", -15.7639, -47.8678),
    Landmark::new("Hospital Universitário", -15.7691, -47.8774),
    Landmark::new("Shopping Liberty Mall", -15.7861, -47.8874),
    Landmark::new("HRAN", -15.7808, -47.8898),
    Landmark::new("Setor Comercial Norte", -15.7861, -47.8874),

    // Asa Sul
    Landmark::new("Hospital de Base", -15.8007, -47.8898),
    Landmark::new("Shopping Pátio Brasil", -15.7983, -47.8935),
    Landmark::new("CONIC", -15.7967, -47.8847),
    Landmark::new("Setor Bancário Sul", -15.8008, -47.8885),
    Landmark::new("Setor Hoteleiro Sul", -15.7953, -47.8897),

    // Lago Sul
    Landmark::new("Pontão do Lago Sul", -15.8283, -47.8719),
    Landmark::new("Hospital Sarah Kubitschek", -15.8053, -47.8825),
    Landmark::new("Aeroporto Internacional de Brasília", -15.8698, -47.9208),

    // Lago Norte
    Landmark::new("Shopping Deck Norte", -15.7433, -47.8684),
    Landmark::new("Parque Nacional de Brasília", -15.7382, -47.9265),

    // Cruzeiro
    Landmark::new("Cruzeiro Center", -15.7897, -47.9377),
    Landmark::new("Colégio Militar de Brasília", -15.7845, -47.9163),

    // Sudoeste
    Landmark::new("Sudoeste Shopping", -15.7994, -47.9250),
    Landmark::new("Hospital das Forças Armadas", -15.8049, -47.9338),

    // Taguatinga
    Landmark::new("Taguatinga Shopping", -15.8320, -48.0542),
    Landmark::new("Administração Regional de Taguatinga", -15.8309, -48.0555),
    Landmark::new("Hospital Regional de Taguatinga", -15.8189, -48.0652),
    Landmark::new("UniCEUB Taguatinga", -15.8282, -48.0621),
    Landmark::new("Avenida Comercial Norte", -15.8264, -48.0602),

    // Ceilândia
    Landmark::new("Shopping JK Ceilândia", -15.8198, -48.1234),
    Landmark::new("Hospital Regional de Ceilândia", -15.8152, -48.1217),
    Landmark::new("Feira Central de Ceilândia", -15.8169, -48.1135),
    Landmark::new("Centro Administrativo Ceilândia", -15.8179, -48.1098),
    Landmark::new("Estação Ceilândia Centro", -15.8174, -48.1107),

    // Águas Claras
    Landmark::new("Águas Claras Shopping", -15.8362, -48.0236),
    Landmark::new("Parque Águas Claras", -15.8382, -48.0202),
    Landmark::new("Estação Arniqueiras", -15.8432, -48.0245),
    Landmark::new("Unieuro Águas Claras", -15.8395, -48.0213),
    Landmark::new("Avenida das Araucárias", -15.8344, -48.0197),

    // Guará
    Landmark::new("ParkShopping", -15.8223, -47.9520),
    Landmark::new("Feira do Guará", -15.8304, -47.9754),
    Landmark::new("Administração Regional do Guará", -15.8298, -47.9737),

    // Sobradinho
    Landmark::new("Hospital Regional de Sobradinho", -15.6500, -47.7940),
    Landmark::new("Administração Regional de Sobradinho", -15.6528, -47.7931),

    // Gama
    Landmark::new("Shopping Sul Gama", -16.0095, -48.0559),
    Landmark::new("Hospital Regional do Gama", -16.0067, -48.0452),
    Landmark::new("Administração Regional do Gama", -16.0192, -48.0650),

    // Planaltina
    Landmark::new("Hospital Regional de Planaltina", -15.6198, -47.6494),
    Landmark::new("Administração Regional de Planaltina", -15.6246, -47.6479),
    Landmark::new("Vale do Amanhecer", -15.6336, -47.6376),
];

/// Builds the delivery point list with ids matching landmark order.
pub fn delivery_points() -> Vec<DeliveryPoint> {
    DELIVERY_LANDMARKS
        .iter()
        .enumerate()
        .map(|(id, landmark)| DeliveryPoint::new(id, landmark.name, landmark.lat, landmark.lon))
        .collect()
}
