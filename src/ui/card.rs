// ============================================================================
// Carte de prix
// ============================================================================
// CardView : les chaînes à afficher, calculées depuis un DisplayState
// render_card : dessine la carte avec ratatui
//
// Trois zones (prix BTC, prix du satoshi, sats par cent) et une ligne de
// statut. Toutes passent en rouge quand le dernier poll a échoué.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::DisplayState;
use crate::ui::format::{
    format_btc_price, format_sats_per_cent, format_satoshi_price, format_time_of_day,
};

pub const CARD_TITLE: &str = " Current Bitcoin Price (USD) ";
pub const SATOSHI_SECTION_TITLE: &str = "Price per Satoshi (USD)";
pub const SATS_PER_CENT_SECTION_TITLE: &str = "Satoshis per 1¢ (USD)";

const LOADING_TEXT: &str = "Loading...";
const PLACEHOLDER: &str = "-";

/// Textes de la carte pour un état donné
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub btc_price: String,
    pub satoshi_price: String,
    pub sats_per_cent: String,

    /// "Last updated: ..." / "Last attempt: ..." / vide pendant le chargement
    pub status_line: String,

    /// Style d'erreur sur les trois zones
    pub is_error: bool,
}

impl CardView {
    pub fn from_state(state: &DisplayState) -> Self {
        match state {
            DisplayState::Loading => Self {
                btc_price: LOADING_TEXT.to_string(),
                satoshi_price: LOADING_TEXT.to_string(),
                sats_per_cent: LOADING_TEXT.to_string(),
                status_line: String::new(),
                is_error: false,
            },
            DisplayState::Ready(snapshot) => Self {
                btc_price: format_btc_price(snapshot.btc_price_usd),
                satoshi_price: format_satoshi_price(snapshot.satoshi_price_usd),
                sats_per_cent: format_sats_per_cent(snapshot.sats_per_cent_usd),
                status_line: format!("Last updated: {}", format_time_of_day(&snapshot.observed_at)),
                is_error: false,
            },
            DisplayState::Failed { message, attempted_at } => Self {
                btc_price: format!("Error: {}", message),
                satoshi_price: PLACEHOLDER.to_string(),
                sats_per_cent: PLACEHOLDER.to_string(),
                status_line: format!("Last attempt: {}", format_time_of_day(attempted_at)),
                is_error: true,
            },
        }
    }
}

/// Style d'une valeur : rouge gras en erreur, orange sinon
fn value_style(is_error: bool, normal: Color) -> Style {
    if is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(normal)
    }
}

/// Dessine la carte dans la zone donnée
pub fn render_card(frame: &mut Frame, area: Rect, view: &CardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(CARD_TITLE)
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prix BTC
            Constraint::Length(3), // Prix du satoshi
            Constraint::Length(3), // Sats par cent
            Constraint::Length(1), // Statut
            Constraint::Min(0),
        ])
        .split(inner);

    // Orange vif pour le prix principal, orange clair pour les dérivés
    let btc_color = Color::Rgb(249, 115, 22);
    let derived_color = Color::Rgb(251, 146, 60);

    let btc = Paragraph::new(Line::from(Span::styled(
        view.btc_price.as_str(),
        value_style(view.is_error, btc_color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(btc, chunks[0]);

    let derived_style = value_style(view.is_error, derived_color);
    render_section(
        frame,
        chunks[1],
        SATOSHI_SECTION_TITLE,
        &view.satoshi_price,
        derived_style,
    );
    render_section(
        frame,
        chunks[2],
        SATS_PER_CENT_SECTION_TITLE,
        &view.sats_per_cent,
        derived_style,
    );

    let status = Paragraph::new(Line::from(Span::styled(
        view.status_line.as_str(),
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[3]);
}

/// Une section séparée par une bordure haute : titre puis valeur
fn render_section(frame: &mut Frame, area: Rect, title: &str, value: &str, style: Style) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(value, style)),
    ];

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests unitaires
// ============================================================================
