/// A report published outside the api.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Report {
    pub title: &'static str,
    pub url: &'static str,
}

pub(crate) const REPORTS: [Report; 2] = [
    Report {
        title: "Sal Order Counts",
        url: "https://drive.google.com/file/d/1VqPV1-p0PCy-2uVhuM_jQS8xxdYFMZlZ/view?usp=drive_link",
    },
    Report {
        title: "Sal Order Breakdown",
        url: "https://drive.google.com/file/d/1Kxs46688Rgb6YJh7SeRi6AFs67-ZBeOb/view?usp=drive_link",
    },
];
