use super::*;

/// Player bolts that reach a hostile damage it, and a hostile that goes down leaves a wreck
/// behind. Hostile bolts that reach the player are spent right away and cost it lives. Returns
/// the number of hostiles destroyed.
pub fn resolve_hits(registry: &mut Registry) -> RegistryResult<usize> {
    let mut targets: Vec<(EntityKey, Point2<f64>, f64)> = registry
        .ships(Category::Hostiles)?
        .filter(|(_, ship)| !ship.is_to_be_removed())
        .map(|(key, ship)| (key, ship.position(), ship.radius()))
        .collect();
    let shots = live_projectiles(registry, Category::PlayerArmaments)?;

    let mut destroyed = 0;
    for (shot, position, damage) in shots {
        let hit = targets
            .iter()
            .position(|(_, center, radius)| (position - *center).magnitude() <= *radius);
        if let Some(index) = hit {
            let (target, center, radius) = targets[index];
            registry.get_mut(Category::PlayerArmaments, shot)?.mark_for_removal();
            let ship = registry.ship_mut(Category::Hostiles, target)?;
            ship.take_damage(damage);
            if ship.is_to_be_removed() {
                targets.swap_remove(index);
                registry.add_entity(Category::Misc, AnyEntity::ship(Wreck::new(center, radius)))?;
                debug!("{} destroyed by {}", target, shot);
                destroyed += 1;
            }
        }
    }

    if let Some((player, center)) = registry.player().map(|(key, p)| (key, p.position())) {
        for (shot, position, damage) in live_projectiles(registry, Category::HostileArmaments)? {
            if (position - center).magnitude() > FIGHTER_RADIUS {
                continue;
            }
            registry
                .remove_entity_from(Category::HostileArmaments, shot)
                .or_log_warn("failed to remove spent bolt");
            if let Some((_, fighter)) = registry.player_mut() {
                fighter.lose_lives(damage);
                info!("player {} hit by {}, {} lives left", player, shot, fighter.lives());
                if fighter.is_to_be_removed() {
                    break;
                }
            }
        }
    }

    Ok(destroyed)
}

fn live_projectiles(
    registry: &Registry,
    category: Category,
) -> RegistryResult<Vec<(EntityKey, Point2<f64>, u32)>> {
    Ok(registry
        .projectiles(category)?
        .filter(|(_, shot)| !shot.is_to_be_removed())
        .map(|(key, shot)| (key, shot.position(), shot.damage()))
        .collect())
}
