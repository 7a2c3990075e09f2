use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    clock::{clock_line, date_line},
    session::{format_mmss, Phase},
    App,
};

const HORIZONTAL_MARGIN: u16 = 4;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let phase_style = match self.session.phase() {
            Phase::Running => Style::default().patch(bold_style).fg(Color::Green),
            Phase::Paused => Style::default().patch(bold_style).fg(Color::Yellow),
            Phase::Idle => Style::default().patch(dim_style),
        };

        // Decorative backdrop first; the foreground chunks paint over it.
        if let Some(backdrop) = &self.backdrop {
            let scenery = Paragraph::new(backdrop.as_str())
                .style(dim_style)
                .wrap(Wrap { trim: false });
            scenery.render(area, buf);
        }

        if area.height < 12 || area.width < (HORIZONTAL_MARGIN * 2 + 10) {
            // Too small for the full layout; show just the readout.
            let readout = Paragraph::new(Span::styled(
                format_mmss(self.session.display_secs()),
                bold_style,
            ))
            .alignment(Alignment::Center);
            readout.render(area, buf);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Min(1),    // top spacer
                    Constraint::Length(1), // title
                    Constraint::Length(1), // readout
                    Constraint::Length(1), // phase
                    Constraint::Length(1), // spacer
                    Constraint::Length(1), // history banner
                    Constraint::Length(1), // legend
                    Constraint::Min(1),    // bottom spacer
                    Constraint::Length(1), // clock
                    Constraint::Length(1), // date
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new(Span::styled("Timer", bold_style)).alignment(Alignment::Center);
        title.render(chunks[1], buf);

        let readout = Paragraph::new(Span::styled(
            format_mmss(self.session.display_secs()),
            Style::default().patch(bold_style).fg(Color::White),
        ))
        .alignment(Alignment::Center);
        readout.render(chunks[2], buf);

        let phase = Paragraph::new(Span::styled(self.session.phase().to_string(), phase_style))
            .alignment(Alignment::Center);
        phase.render(chunks[3], buf);

        if let Some(text) = self.banner.text() {
            let banner = Paragraph::new(Span::styled(
                text.to_string(),
                Style::default().fg(Color::Cyan).patch(italic_style),
            ))
            .alignment(Alignment::Center);
            banner.render(chunks[5], buf);
        }

        let legend = Paragraph::new(Span::styled(
            "(s)tart / (p)ause / (r)eset / (h)istory / ↑ longer / ↓ shorter / (esc)ape",
            Style::default().patch(italic_style).patch(dim_style),
        ))
        .alignment(Alignment::Center);
        legend.render(chunks[6], buf);

        let clock = Paragraph::new(Span::styled(clock_line(&self.now), bold_style))
            .alignment(Alignment::Right);
        clock.render(chunks[8], buf);

        let date = Paragraph::new(Span::styled(date_line(&self.now), dim_style))
            .alignment(Alignment::Right);
        date.render(chunks[9], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::study_today_line;
    use chrono::TimeZone;
    use ratatui::{buffer::Buffer, layout::Rect};

    fn rendered(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn test_app() -> App {
        let mut app = App::new(1500, None);
        app.now = chrono::Local
            .with_ymd_and_hms(2024, 8, 5, 19, 5, 0)
            .unwrap();
        app
    }

    #[test]
    fn idle_screen_shows_default_readout() {
        let app = test_app();
        let out = rendered(&app, 80, 24);

        assert!(out.contains("Timer"));
        assert!(out.contains("25:00"));
        assert!(out.contains("idle"));
    }

    #[test]
    fn running_screen_shows_countdown_and_phase() {
        let mut app = test_app();
        app.session.start();
        app.session.tick();

        let out = rendered(&app, 80, 24);
        assert!(out.contains("24:59"));
        assert!(out.contains("running"));
    }

    #[test]
    fn history_banner_is_rendered_while_visible() {
        let mut app = test_app();
        app.banner.show(study_today_line(2));

        let out = rendered(&app, 80, 24);
        assert!(out.contains("Study Today: 00 hours 50 minutes"));
    }

    #[test]
    fn clock_and_date_are_rendered() {
        let app = test_app();
        let out = rendered(&app, 80, 24);

        assert!(out.contains("07:05 PM"));
        assert!(out.contains("05 August"));
    }

    #[test]
    fn legend_lists_the_controls() {
        let app = test_app();
        let out = rendered(&app, 100, 24);

        assert!(out.contains("(s)tart"));
        assert!(out.contains("(esc)ape"));
    }

    #[test]
    fn tiny_area_still_shows_the_readout() {
        let app = test_app();
        let out = rendered(&app, 12, 3);

        assert!(out.contains("25:00"));
    }

    #[test]
    fn backdrop_renders_behind_the_timer() {
        let mut app = test_app();
        app.backdrop = Some("~~~ forest ~~~".repeat(40));

        let out = rendered(&app, 80, 24);
        assert!(out.contains("forest"));
        assert!(out.contains("25:00"));
    }

    #[test]
    fn renders_at_extreme_sizes_without_panicking() {
        let app = test_app();
        for (w, h) in [(1, 1), (5, 2), (200, 5), (20, 60), (300, 100)] {
            let area = Rect::new(0, 0, w, h);
            let mut buffer = Buffer::empty(area);
            app.render(area, &mut buffer);
            assert_eq!(*buffer.area(), area);
        }
    }
}
