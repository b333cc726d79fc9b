// ============================================================================
// Dashboard - Rendu de l'écran complet
// ============================================================================
// Header (titre), carte de prix au centre, footer (raccourcis clavier)
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::card::{render_card, CardView};

pub const APP_TITLE: &str = " Crypto Coaster - BTC & Satoshi Price ";

/// Largeur et hauteur de la carte centrée
const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 12;

/// Dessine l'interface complète
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0]);

    let view = CardView::from_state(&app.widget().state());
    render_card(frame, centered_rect(CARD_WIDTH, CARD_HEIGHT, chunks[1]), &view);

    render_footer(frame, chunks[2]);
}

/// Layout vertical : header, contenu, footer
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Carte
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Zone de taille fixe centrée dans `area` (rognée si le terminal est petit)
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(APP_TITLE)
        .title_alignment(Alignment::Center);

    let text = Line::from(Span::styled(
        "BTC/USD via CoinGecko, refreshed every 60 seconds",
        Style::default().fg(Color::Gray),
    ));

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = Line::from(vec![
        Span::styled("[q / Esc]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(" Quit  "),
        Span::styled("[r]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" Refresh"),
    ]);

    let paragraph = Paragraph::new(shortcuts).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
