//! String localization.
//!
//! Keys are a closed enum rather than strings: a missing translation is a
//! compile error, not a runtime fault. Lookup is a pure match over static
//! tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Pl,
    Zh,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Pl, Language::Zh];

    /// The code the config file persists (serde's lowercase rename).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Pl => "pl",
            Language::Zh => "zh",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Pl => "Polski",
            Language::Zh => "中文",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Es => "🇪🇸",
            Language::Pl => "🇵🇱",
            Language::Zh => "🇨🇳",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// Every translatable string in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    // Onboarding
    Welcome,
    GetStarted,
    SelectLanguage,
    Back,
    Continue,
    Capture,
    UploadId,
    FrontOfId,
    BackOfId,
    TakeSelfie,
    Verifying,
    Verified,
    CreatePin,
    ConfirmPin,
    // Dashboard
    Balance,
    ThisMonth,
    Spending,
    Remaining,
    SendMoney,
    PayBill,
    AddMoney,
    ViewCards,
    RecentTransactions,
    SeeAll,
    // Navigation
    Home,
    Transactions,
    Automations,
    More,
    // Automations
    CreateAutomation,
    RecurringPayment,
    ScheduledTransfer,
    RoundUp,
    // Transactions
    Dispute,
    // What's new
    WhatsNew,
    SkipTour,
    Next,
    Done,
    // Settings
    Settings,
    DisplayMode,
    Standard,
    Simplified,
    LanguageLabel,
}

/// Total lookup — defined for every (language, key) pair.
pub fn translate(lang: Language, key: Key) -> &'static str {
    match lang {
        Language::En => en(key),
        Language::Es => es(key),
        Language::Pl => pl(key),
        Language::Zh => zh(key),
    }
}

fn en(key: Key) -> &'static str {
    match key {
        Key::Welcome => "Welcome to GlassBank! Let's get you set up in just a few minutes.",
        Key::GetStarted => "Get Started",
        Key::SelectLanguage => "Select Language",
        Key::Back => "Back",
        Key::Continue => "Continue",
        Key::Capture => "Capture",
        Key::UploadId => "Upload your ID",
        Key::FrontOfId => "Front of ID",
        Key::BackOfId => "Back of ID",
        Key::TakeSelfie => "Take a Selfie",
        Key::Verifying => "Verifying your identity",
        Key::Verified => "Identity verified",
        Key::CreatePin => "Create your PIN",
        Key::ConfirmPin => "Confirm your PIN",
        Key::Balance => "Balance",
        Key::ThisMonth => "This month",
        Key::Spending => "spending",
        Key::Remaining => "remaining",
        Key::SendMoney => "Send Money",
        Key::PayBill => "Pay Bill",
        Key::AddMoney => "Add Money",
        Key::ViewCards => "View Cards",
        Key::RecentTransactions => "Recent Transactions",
        Key::SeeAll => "See all",
        Key::Home => "Home",
        Key::Transactions => "Transactions",
        Key::Automations => "Automations",
        Key::More => "More",
        Key::CreateAutomation => "Create Automation",
        Key::RecurringPayment => "Recurring Payment",
        Key::ScheduledTransfer => "Scheduled Transfer",
        Key::RoundUp => "Round-Up Savings",
        Key::Dispute => "Dispute this transaction",
        Key::WhatsNew => "What's New",
        Key::SkipTour => "Skip tour",
        Key::Next => "Next",
        Key::Done => "Done",
        Key::Settings => "Settings",
        Key::DisplayMode => "Display Mode",
        Key::Standard => "Standard",
        Key::Simplified => "Simplified",
        Key::LanguageLabel => "Language",
    }
}

fn es(key: Key) -> &'static str {
    match key {
        Key::Welcome => "¡Bienvenido a GlassBank! Te pondremos en marcha en solo unos minutos.",
        Key::GetStarted => "Comenzar",
        Key::SelectLanguage => "Seleccionar idioma",
        Key::Back => "Atrás",
        Key::Continue => "Continuar",
        Key::Capture => "Capturar",
        Key::UploadId => "Sube tu documento",
        Key::FrontOfId => "Anverso del documento",
        Key::BackOfId => "Reverso del documento",
        Key::TakeSelfie => "Tómate una selfie",
        Key::Verifying => "Verificando tu identidad",
        Key::Verified => "Identidad verificada",
        Key::CreatePin => "Crea tu PIN",
        Key::ConfirmPin => "Confirma tu PIN",
        Key::Balance => "Saldo",
        Key::ThisMonth => "Este mes",
        Key::Spending => "gastos",
        Key::Remaining => "restante",
        Key::SendMoney => "Enviar dinero",
        Key::PayBill => "Pagar factura",
        Key::AddMoney => "Añadir dinero",
        Key::ViewCards => "Ver tarjetas",
        Key::RecentTransactions => "Transacciones recientes",
        Key::SeeAll => "Ver todo",
        Key::Home => "Inicio",
        Key::Transactions => "Transacciones",
        Key::Automations => "Automatizaciones",
        Key::More => "Más",
        Key::CreateAutomation => "Crear automatización",
        Key::RecurringPayment => "Pago recurrente",
        Key::ScheduledTransfer => "Transferencia programada",
        Key::RoundUp => "Redondeo de ahorro",
        Key::Dispute => "Disputar esta transacción",
        Key::WhatsNew => "Novedades",
        Key::SkipTour => "Omitir recorrido",
        Key::Next => "Siguiente",
        Key::Done => "Listo",
        Key::Settings => "Ajustes",
        Key::DisplayMode => "Modo de pantalla",
        Key::Standard => "Estándar",
        Key::Simplified => "Simplificado",
        Key::LanguageLabel => "Idioma",
    }
}

fn pl(key: Key) -> &'static str {
    match key {
        Key::Welcome => "Witamy w GlassBank! Skonfigurujemy wszystko w kilka minut.",
        Key::GetStarted => "Rozpocznij",
        Key::SelectLanguage => "Wybierz język",
        Key::Back => "Wstecz",
        Key::Continue => "Dalej",
        Key::Capture => "Zrób zdjęcie",
        Key::UploadId => "Prześlij dokument tożsamości",
        Key::FrontOfId => "Przód dokumentu",
        Key::BackOfId => "Tył dokumentu",
        Key::TakeSelfie => "Zrób selfie",
        Key::Verifying => "Weryfikujemy twoją tożsamość",
        Key::Verified => "Tożsamość zweryfikowana",
        Key::CreatePin => "Utwórz PIN",
        Key::ConfirmPin => "Potwierdź PIN",
        Key::Balance => "Saldo",
        Key::ThisMonth => "W tym miesiącu",
        Key::Spending => "wydatki",
        Key::Remaining => "pozostało",
        Key::SendMoney => "Wyślij pieniądze",
        Key::PayBill => "Opłać rachunek",
        Key::AddMoney => "Dodaj środki",
        Key::ViewCards => "Zobacz karty",
        Key::RecentTransactions => "Ostatnie transakcje",
        Key::SeeAll => "Zobacz wszystkie",
        Key::Home => "Start",
        Key::Transactions => "Transakcje",
        Key::Automations => "Automatyzacje",
        Key::More => "Więcej",
        Key::CreateAutomation => "Utwórz automatyzację",
        Key::RecurringPayment => "Płatność cykliczna",
        Key::ScheduledTransfer => "Przelew zaplanowany",
        Key::RoundUp => "Zaokrąglanie oszczędności",
        Key::Dispute => "Zakwestionuj tę transakcję",
        Key::WhatsNew => "Co nowego",
        Key::SkipTour => "Pomiń",
        Key::Next => "Dalej",
        Key::Done => "Gotowe",
        Key::Settings => "Ustawienia",
        Key::DisplayMode => "Tryb wyświetlania",
        Key::Standard => "Standardowy",
        Key::Simplified => "Uproszczony",
        Key::LanguageLabel => "Język",
    }
}

fn zh(key: Key) -> &'static str {
    match key {
        Key::Welcome => "欢迎使用 GlassBank！只需几分钟即可完成设置。",
        Key::GetStarted => "开始使用",
        Key::SelectLanguage => "选择语言",
        Key::Back => "返回",
        Key::Continue => "继续",
        Key::Capture => "拍摄",
        Key::UploadId => "上传证件",
        Key::FrontOfId => "证件正面",
        Key::BackOfId => "证件背面",
        Key::TakeSelfie => "自拍照",
        Key::Verifying => "正在验证您的身份",
        Key::Verified => "身份验证成功",
        Key::CreatePin => "创建 PIN 码",
        Key::ConfirmPin => "确认 PIN 码",
        Key::Balance => "余额",
        Key::ThisMonth => "本月",
        Key::Spending => "支出",
        Key::Remaining => "剩余",
        Key::SendMoney => "转账",
        Key::PayBill => "缴费",
        Key::AddMoney => "充值",
        Key::ViewCards => "查看卡片",
        Key::RecentTransactions => "最近交易",
        Key::SeeAll => "查看全部",
        Key::Home => "首页",
        Key::Transactions => "交易",
        Key::Automations => "自动化",
        Key::More => "更多",
        Key::CreateAutomation => "创建自动化",
        Key::RecurringPayment => "定期付款",
        Key::ScheduledTransfer => "预约转账",
        Key::RoundUp => "零钱储蓄",
        Key::Dispute => "对此交易提出争议",
        Key::WhatsNew => "新功能",
        Key::SkipTour => "跳过",
        Key::Next => "下一步",
        Key::Done => "完成",
        Key::Settings => "设置",
        Key::DisplayMode => "显示模式",
        Key::Standard => "标准",
        Key::Simplified => "简化",
        Key::LanguageLabel => "语言",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        for (i, a) in Language::ALL.iter().enumerate() {
            for b in &Language::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_every_language_translates_common_keys() {
        for lang in Language::ALL {
            for key in [Key::Continue, Key::Back, Key::WhatsNew, Key::Balance] {
                assert!(!translate(lang, key).is_empty());
            }
        }
    }

    #[test]
    fn test_lookup_is_language_sensitive() {
        assert_eq!(translate(Language::En, Key::Continue), "Continue");
        assert_eq!(translate(Language::Es, Key::Continue), "Continuar");
        assert_eq!(translate(Language::Pl, Key::Continue), "Dalej");
        assert_eq!(translate(Language::Zh, Key::Continue), "继续");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
