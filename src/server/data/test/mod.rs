mod attendance;
