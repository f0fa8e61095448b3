use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    UsefulDocuments,
    PrintVerify,
    UpdateDetails,
    Login,
}

impl MenuId {
    pub fn key(&self) -> &'static str {
        match self {
            MenuId::UsefulDocuments => "useful",
            MenuId::PrintVerify => "print",
            MenuId::UpdateDetails => "update",
            MenuId::Login => "login",
        }
    }
}

/// Horizontal growth direction of an open dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Flush with the trigger's right edge, growing left.
    Left,
    #[default]
    Right,
}

impl Alignment {
    pub fn panel_class(&self) -> &'static str {
        match self {
            Alignment::Left => "dropdown-menu dropdown-left",
            Alignment::Right => "dropdown-menu",
        }
    }
}

/// Issued for every open event; a measurement only commits against the
/// ticket of the latest open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTicket {
    pub menu: MenuId,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMeasurement {
    /// Right edge of the panel's bounding box in viewport coordinates.
    pub right: f64,
}

pub fn resolve_alignment(measurement: Option<PanelMeasurement>, viewport_width: f64) -> Alignment {
    match measurement {
        Some(m) if m.right > viewport_width => Alignment::Left,
        _ => Alignment::Right,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
    active: Option<MenuId>,
    alignment: HashMap<MenuId, Alignment>,
    open_seq: u64,
}

impl DropdownState {
    #[cfg(test)]
    pub fn active(&self) -> Option<MenuId> {
        self.active
    }

    pub fn is_open(&self, menu: MenuId) -> bool {
        self.active == Some(menu)
    }

    pub fn alignment(&self, menu: MenuId) -> Alignment {
        self.alignment.get(&menu).copied().unwrap_or_default()
    }

    /// Opens `menu`, closing any other. Re-opening the active menu keeps it
    /// visible but still requires a fresh measurement.
    pub fn open(&mut self, menu: MenuId) -> OpenTicket {
        self.open_seq += 1;
        self.active = Some(menu);
        self.alignment.remove(&menu);
        OpenTicket {
            menu,
            seq: self.open_seq,
        }
    }

    pub fn toggle(&mut self, menu: MenuId) -> Option<OpenTicket> {
        if self.is_open(menu) {
            self.close();
            None
        } else {
            Some(self.open(menu))
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Second phase of an open: records the alignment measured after render.
    /// Returns `None` when the ticket is stale.
    pub fn commit(
        &mut self,
        ticket: OpenTicket,
        measurement: Option<PanelMeasurement>,
        viewport_width: f64,
    ) -> Option<Alignment> {
        if ticket.seq != self.open_seq || self.active != Some(ticket.menu) {
            return None;
        }
        let alignment = resolve_alignment(measurement, viewport_width);
        self.alignment.insert(ticket.menu, alignment);
        Some(alignment)
    }
}
