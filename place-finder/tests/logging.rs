#[cfg(test)]
mod tests {
    use anyhow::Result;
    use log::{LevelFilter, info};
    use place_finder::geometry::primitives::{Rect, Size};
    use place_finder::io;
    use place_finder::search::PlaceFinder;

    #[test]
    fn search_with_logger() -> Result<()> {
        io::init_logger(LevelFilter::Trace)?;
        //a second logger cannot be installed
        assert!(io::init_logger(LevelFilter::Info).is_err());

        let occupied = vec![Rect::from_xywh(0.0, 0.0, 640.0, 200.0)?];
        let pf = PlaceFinder::new_default(occupied, Size::try_new(640, 640)?, Size::try_new(3, 2)?, true)?;
        let placement = pf.find_best_place();
        info!("placement: {placement:?}");
        assert!(placement.is_some());
        Ok(())
    }
}
