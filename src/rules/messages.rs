//! Display strings (pt-BR).

pub const DEFAULT_ANSWER: &str =
    "Desculpe, não consegui entender o que você quis dizer, poderia reformular por favor?";

// parking
pub const PARKING_HIGH_VOLUME: &str = "Hoje é um dia de alto movimento no estacionamento: tente chegar ou sair 20 minutos antes ou depois dos horários de costume.";
pub const PARKING_ALTERNATE_EXIT: &str =
    "Use a saída alternativa pelo estacionamento das vans para fugir da fila nas cancelas principais.";
pub const PARKING_CREDENTIAL_TIP: &str = "Dica: faça a sua credencial de estacionamento, assim você economiza na tarifa e paga mais rápido na cabine.";

// assistance
pub const ASSISTANCE_HIGH_VOLUME: &str =
    "Hoje é um dia de alto movimento nos atendimentos, prepare-se para filas maiores que o normal.";
pub const ASSISTANCE_TIP: &str = "Dica: se não for urgente, prefira dias com menos movimento, como a sexta-feira, e evite o intervalo do almoço.";

// snacks
pub const SNACKS_TIP: &str = "Dica: evite o intervalo do almoço, chegue 20 minutos antes ou depois dele.";

pub fn snack_recommendation(shop: &str) -> String {
    format!("A opção com menos fila para você agora é: {shop}.")
}

// greetings
pub const GOOD_MORNING: &str = "Bom dia! Como posso ajudar?";
pub const GOOD_AFTERNOON: &str = "Boa tarde! Como posso ajudar?";
pub const GOOD_EVENING: &str = "Boa noite! Como posso ajudar?";
