use crate::models::Reward;

fn reward(id: &str, title: &str, ally_name: &str, cost_points: i64, description: &str) -> Reward {
    Reward {
        id: id.to_string(),
        title: title.to_string(),
        ally_name: ally_name.to_string(),
        cost_points,
        description: description.to_string(),
    }
}

pub fn catalog() -> Vec<Reward> {
    vec![
        reward(
            "rw-001",
            "Clase de surf para principiantes",
            "Pukana Surf School",
            200,
            "Una clase grupal de 90 minutos en la Costa Verde, tabla y wetsuit incluidos.",
        ),
        reward(
            "rw-002",
            "Menú marino 2x1",
            "Cevichería La Canta Rana",
            120,
            "Dos menús marinos al precio de uno, de lunes a jueves.",
        ),
        reward(
            "rw-003",
            "Tote bag EcoPlaya",
            "EcoKits Perú",
            60,
            "Bolsa de tela reciclada con el logo de la campaña.",
        ),
        reward(
            "rw-004",
            "Salida en stand-up paddle",
            "Ancón SUP Club",
            250,
            "Recorrido guiado de una hora por la bahía de Ancón.",
        ),
    ]
}
